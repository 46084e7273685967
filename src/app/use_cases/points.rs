//! Use-Case: Punkte anlegen und das Parallelogramm vervollständigen.

use crate::app::AppState;
use crate::core::{Point, PointKind};
use glam::Vec2;

/// Hängt einen Punkt an die Punktfolge an und markiert die Fläche als dirty.
///
/// Gibt `false` zurück, wenn bereits vier Punkte existieren.
pub fn add_point(state: &mut AppState, point: Point) -> bool {
    if !state.shape.push(point) {
        return false;
    }
    state.view.mark_dirty();
    true
}

/// Legt einen per Doppelklick gesetzten Punkt an `pos` an.
pub fn add_placed_point(state: &mut AppState, pos: Vec2) -> bool {
    let point = Point::new(
        pos,
        state.options.point_radius,
        state.options.point_color_placed,
        PointKind::Placed,
    );
    add_point(state, point)
}

/// Ergänzt den vierten Punkt per Schließungsformel `p0 + (p2 - p1)`.
///
/// Nur wirksam, wenn genau drei Punkte existieren.
pub fn complete_parallelogram(state: &mut AppState) -> Option<Vec2> {
    if state.shape.len() != 3 {
        return None;
    }
    let target = state.shape.closure_point()?;
    let point = Point::new(
        target,
        state.options.point_radius,
        state.options.point_color_derived,
        PointKind::Derived,
    );
    add_point(state, point).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShapePhase;

    #[test]
    fn add_placed_point_marks_dirty_and_uses_options() {
        let mut state = AppState::new();
        state.view.dirty = false;
        state.options.point_radius = 7.0;

        assert!(add_placed_point(&mut state, Vec2::new(3.0, 4.0)));

        assert!(state.view.dirty);
        let point = &state.shape.points()[0];
        assert_eq!(point.radius(), 7.0);
        assert_eq!(point.kind, PointKind::Placed);
        assert_eq!(point.fill, state.options.point_color_placed);
    }

    #[test]
    fn complete_parallelogram_derives_fourth_point() {
        let mut state = AppState::new();
        add_placed_point(&mut state, Vec2::new(10.0, 10.0));
        add_placed_point(&mut state, Vec2::new(50.0, 10.0));
        add_placed_point(&mut state, Vec2::new(50.0, 50.0));

        let derived = complete_parallelogram(&mut state);

        assert_eq!(derived, Some(Vec2::new(10.0, 50.0)));
        assert_eq!(state.phase(), ShapePhase::Complete);
        assert_eq!(state.shape.points()[3].kind, PointKind::Derived);
        assert_eq!(
            state.shape.points()[3].fill,
            state.options.point_color_derived
        );
    }

    #[test]
    fn complete_parallelogram_requires_exactly_three_points() {
        let mut state = AppState::new();
        add_placed_point(&mut state, Vec2::new(10.0, 10.0));

        assert_eq!(complete_parallelogram(&mut state), None);
        assert_eq!(state.point_count(), 1);
    }

    #[test]
    fn fifth_point_is_rejected_without_marking_dirty() {
        let mut state = AppState::new();
        for i in 0..3 {
            add_placed_point(&mut state, Vec2::new(i as f32 * 10.0, 0.0));
        }
        complete_parallelogram(&mut state);
        state.view.dirty = false;

        assert!(!add_placed_point(&mut state, Vec2::new(99.0, 99.0)));
        assert!(!state.view.dirty);
        assert_eq!(state.point_count(), 4);
    }
}
