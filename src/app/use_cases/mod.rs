//! Use-Cases der Application-Layer-Orchestrierung.

pub mod drag;
pub mod overlays;
pub mod points;
pub mod viewport;
