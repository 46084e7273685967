//! Use-Case: Punkte greifen, ziehen und loslassen.

use crate::app::AppState;
use glam::Vec2;

/// Startet einen Drag auf Punkt `index`.
///
/// Merkt sich den Abstand Zeiger → Punkt, damit der Punkt beim Ziehen nicht
/// auf den Zeiger springt.
pub fn begin_drag(state: &mut AppState, index: usize, pointer: Vec2) -> bool {
    let Some(point) = state.shape.point(index) else {
        return false;
    };
    state.selection.drag_offset = pointer - point.position;
    state.selection.dragging = true;
    state.selection.selected_index = Some(index);
    state.view.mark_dirty();
    true
}

/// Führt den gezogenen Punkt auf die Zeigerposition nach.
///
/// Bei vollständigem, gekoppeltem Parallelogramm wird der vierte Punkt
/// nach jeder Bewegung neu berechnet.
pub fn update_drag(state: &mut AppState, pointer: Vec2) {
    if !state.selection.dragging {
        return;
    }
    let Some(index) = state.selection.selected_index else {
        return;
    };
    let target = pointer - state.selection.drag_offset;
    let Some(point) = state.shape.point_mut(index) else {
        return;
    };
    point.position = target;

    if state.shape.is_complete() && state.toggles.lock_fourth_point {
        state.shape.snap_fourth_point();
    }

    state.view.mark_dirty();
}

/// Beendet den Drag; die Selektion bleibt erhalten.
pub fn end_drag(state: &mut AppState) {
    state.selection.dragging = false;
}

/// Hebt die Selektion auf (Klick ins Leere).
///
/// Gibt `true` zurück, wenn eine Selektion bestand.
pub fn clear_selection(state: &mut AppState) -> bool {
    let had_selection = state.selection.selected_index.is_some();
    state.selection.clear();
    if had_selection {
        state.view.mark_dirty();
    }
    had_selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::points::{add_placed_point, complete_parallelogram};
    use approx::assert_relative_eq;

    fn complete_state() -> AppState {
        let mut state = AppState::new();
        add_placed_point(&mut state, Vec2::new(10.0, 10.0));
        add_placed_point(&mut state, Vec2::new(50.0, 10.0));
        add_placed_point(&mut state, Vec2::new(50.0, 50.0));
        complete_parallelogram(&mut state);
        state
    }

    #[test]
    fn begin_drag_records_offset_and_selection() {
        let mut state = complete_state();
        state.view.dirty = false;

        assert!(begin_drag(&mut state, 1, Vec2::new(52.0, 13.0)));

        assert!(state.selection.dragging);
        assert_eq!(state.selection.selected_index, Some(1));
        assert_eq!(state.selection.drag_offset, Vec2::new(2.0, 3.0));
        assert!(state.view.dirty);
    }

    #[test]
    fn begin_drag_on_missing_index_is_rejected() {
        let mut state = AppState::new();

        assert!(!begin_drag(&mut state, 2, Vec2::ZERO));
        assert!(!state.selection.dragging);
    }

    #[test]
    fn update_drag_moves_point_by_pointer_delta() {
        let mut state = complete_state();
        state.toggles.lock_fourth_point = false;
        begin_drag(&mut state, 2, Vec2::new(51.0, 49.0));

        update_drag(&mut state, Vec2::new(61.5, 44.0));

        let moved = state.shape.points()[2].position;
        assert_relative_eq!(moved.x, 60.5);
        assert_relative_eq!(moved.y, 45.0);
        // Entkoppelt: vierter Punkt bleibt stehen
        assert_eq!(state.shape.points()[3].position, Vec2::new(10.0, 50.0));
    }

    #[test]
    fn update_drag_with_lock_keeps_parallelogram_closed() {
        let mut state = complete_state();
        begin_drag(&mut state, 0, Vec2::new(10.0, 10.0));

        update_drag(&mut state, Vec2::new(20.0, 0.0));

        let points = state.shape.points();
        let expected = points[0].position + (points[2].position - points[1].position);
        assert_eq!(points[3].position, expected);
        assert_eq!(points[3].position, Vec2::new(20.0, 40.0));
    }

    #[test]
    fn locked_fourth_point_snaps_back_when_dragged_directly() {
        let mut state = complete_state();
        begin_drag(&mut state, 3, Vec2::new(10.0, 50.0));

        update_drag(&mut state, Vec2::new(80.0, 80.0));

        assert_eq!(state.shape.points()[3].position, Vec2::new(10.0, 50.0));
    }

    #[test]
    fn update_drag_without_drag_is_noop() {
        let mut state = complete_state();
        state.view.dirty = false;

        update_drag(&mut state, Vec2::new(99.0, 99.0));

        assert!(!state.view.dirty);
        assert_eq!(state.shape.points()[0].position, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn end_drag_keeps_selection() {
        let mut state = complete_state();
        begin_drag(&mut state, 1, Vec2::new(50.0, 10.0));

        end_drag(&mut state);

        assert!(!state.selection.dragging);
        assert_eq!(state.selection.selected_index, Some(1));
    }

    #[test]
    fn clear_selection_marks_dirty_only_when_selected() {
        let mut state = complete_state();
        state.view.dirty = false;
        assert!(!clear_selection(&mut state));
        assert!(!state.view.dirty);

        begin_drag(&mut state, 0, Vec2::new(10.0, 10.0));
        end_drag(&mut state);
        state.view.dirty = false;

        assert!(clear_selection(&mut state));
        assert!(state.view.dirty);
        assert_eq!(state.selection.selected_index, None);
    }
}
