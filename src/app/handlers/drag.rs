//! Handler für Drag- und Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Startet einen Drag auf dem getroffenen Punkt.
pub fn begin(state: &mut AppState, index: usize, pos: glam::Vec2) {
    if use_cases::drag::begin_drag(state, index, pos) {
        log::debug!("Drag gestartet auf Punkt {}", index);
    }
}

/// Führt den gezogenen Punkt nach.
pub fn update(state: &mut AppState, pos: glam::Vec2) {
    use_cases::drag::update_drag(state, pos);
}

/// Beendet den Drag.
pub fn end(state: &mut AppState) {
    if state.selection.dragging {
        log::debug!("Drag beendet");
    }
    use_cases::drag::end_drag(state);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    if use_cases::drag::clear_selection(state) {
        log::debug!("Selektion aufgehoben");
    }
}
