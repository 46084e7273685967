//! Use-Case: Overlay-Schalter und Kopplung des vierten Punkts.

use crate::app::AppState;

/// Schaltet die Parallelogramm-Kanten um.
pub fn toggle_outline(state: &mut AppState) {
    state.toggles.show_outline = !state.toggles.show_outline;
    state.view.mark_dirty();
}

/// Schaltet die eingeschriebene Kurve um.
pub fn toggle_inscribed_curve(state: &mut AppState) {
    state.toggles.show_inscribed_curve = !state.toggles.show_inscribed_curve;
    state.view.mark_dirty();
}

/// Schaltet die Kopplung des vierten Punkts um.
///
/// Vor Vervollständigung wirkungslos. Beim Einschalten springt der vierte
/// Punkt sofort auf die Schließungsposition zurück.
pub fn toggle_lock(state: &mut AppState) -> bool {
    if !state.shape.is_complete() {
        return false;
    }
    state.toggles.lock_fourth_point = !state.toggles.lock_fourth_point;
    if state.toggles.lock_fourth_point {
        state.shape.snap_fourth_point();
    }
    state.view.mark_dirty();
    true
}
