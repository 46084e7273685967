//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Punkte ===
            AppCommand::AddPoint { pos } => handlers::points::add_point(state, pos),
            AppCommand::CompleteParallelogram => handlers::points::complete(state),

            // === Drag & Selektion ===
            AppCommand::BeginDrag { index, pos } => handlers::drag::begin(state, index, pos),
            AppCommand::UpdateDrag { pos } => handlers::drag::update(state, pos),
            AppCommand::EndDrag => handlers::drag::end(state),
            AppCommand::ClearSelection => handlers::drag::clear_selection(state),

            // === Overlays ===
            AppCommand::ToggleOutline => handlers::overlays::toggle_outline(state),
            AppCommand::ToggleInscribedCurve => handlers::overlays::toggle_inscribed_curve(state),
            AppCommand::ToggleLock => handlers::overlays::toggle_lock(state),

            // === Fläche ===
            AppCommand::SetSurfaceSize { size } => handlers::view::set_surface_size(state, size),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
