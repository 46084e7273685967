//! Use-Case-Funktionen für den Flächen-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Flächengröße und erzwingt ein Neuzeichnen.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    if state.view.surface_size == size {
        return;
    }
    state.view.surface_size = size;
    state.view.mark_dirty();
}
