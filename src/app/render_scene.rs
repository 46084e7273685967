//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        surface_size: glam::Vec2::from(state.view.surface_size),
        points: state.shape.points().to_vec(),
        selected_index: state.selection.selected_index,
        show_outline: state.toggles.show_outline,
        show_inscribed_curve: state.toggles.show_inscribed_curve,
        options: state.options.clone(),
    }
}
