//! Parallelogramm-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorSession, OverlayToggles,
    SelectionState, ViewState,
};
pub use core::{Parallelogram, Point, PointKind, ShapePhase, MAX_POINTS};
pub use shared::{EditorOptions, RenderScene, Surface};
