//! Application-Layer: Controller, State, Events, Use-Cases und Sitzung.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
mod session;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Punkte, Selektion, Schalter).
pub mod state;
pub mod use_cases;

pub use crate::core::{Parallelogram, ShapePhase};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use session::EditorSession;
pub use state::{AppState, OverlayToggles, SelectionState, ViewState};
