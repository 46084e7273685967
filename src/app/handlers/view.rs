//! Handler für die Zeichenfläche.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktualisiert die Flächengröße im State.
pub fn set_surface_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}
