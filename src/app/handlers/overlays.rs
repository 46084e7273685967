//! Handler für Overlay-Schalter.

use crate::app::use_cases;
use crate::app::AppState;

/// Schaltet die Parallelogramm-Kanten um.
pub fn toggle_outline(state: &mut AppState) {
    use_cases::overlays::toggle_outline(state);
    log::debug!("Kanten sichtbar: {}", state.toggles.show_outline);
}

/// Schaltet die eingeschriebene Kurve um.
pub fn toggle_inscribed_curve(state: &mut AppState) {
    use_cases::overlays::toggle_inscribed_curve(state);
    log::debug!("Ellipse sichtbar: {}", state.toggles.show_inscribed_curve);
}

/// Schaltet die Kopplung des vierten Punkts um.
pub fn toggle_lock(state: &mut AppState) {
    if use_cases::overlays::toggle_lock(state) {
        log::debug!("Vierter Punkt gekoppelt: {}", state.toggles.lock_fourth_point);
    } else {
        log::debug!("Sperre ignoriert: Parallelogramm noch nicht vollständig");
    }
}
