//! Handler für das Anlegen von Punkten.

use crate::app::use_cases;
use crate::app::AppState;

/// Legt einen Punkt an der Doppelklick-Position an.
pub fn add_point(state: &mut AppState, pos: glam::Vec2) {
    if use_cases::points::add_placed_point(state, pos) {
        log::debug!(
            "Punkt {} angelegt bei ({:.1}, {:.1})",
            state.point_count(),
            pos.x,
            pos.y
        );
    } else {
        log::debug!("Doppelklick ignoriert: Parallelogramm bereits vollständig");
    }
}

/// Ergänzt den vierten Punkt per Schließungsformel.
pub fn complete(state: &mut AppState) {
    if let Some(pos) = use_cases::points::complete_parallelogram(state) {
        log::info!(
            "Parallelogramm vervollständigt, vierter Punkt bei ({:.1}, {:.1})",
            pos.x,
            pos.y
        );
    }
}
