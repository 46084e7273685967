//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, ShapePhase};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => match state.shape.hit_test(pos) {
            Some(index) => vec![AppCommand::BeginDrag { index, pos }],
            // Klick ins Leere → Deselektieren
            None => vec![AppCommand::ClearSelection],
        },
        AppIntent::PointerMoved { pos } => {
            if state.selection.dragging {
                vec![AppCommand::UpdateDrag { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::EndDrag],
        AppIntent::PointerDoubleClicked { pos } => match state.phase() {
            ShapePhase::Empty | ShapePhase::Partial => vec![AppCommand::AddPoint { pos }],
            ShapePhase::ThreePoints => vec![AppCommand::CompleteParallelogram],
            ShapePhase::Complete => vec![],
        },
        AppIntent::SurfaceResized { size } => {
            if state.view.surface_size == size {
                vec![]
            } else {
                vec![AppCommand::SetSurfaceSize { size }]
            }
        }
        // Reset ersetzt die komplette Sitzung und läuft nicht über Commands
        AppIntent::ResetRequested => vec![],
        AppIntent::ToggleOutlineRequested => vec![AppCommand::ToggleOutline],
        AppIntent::ToggleInscribedCurveRequested => vec![AppCommand::ToggleInscribedCurve],
        AppIntent::ToggleLockRequested => vec![AppCommand::ToggleLock],
    }
}
