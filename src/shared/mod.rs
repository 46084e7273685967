//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
mod surface;

pub use options::{EditorOptions, LabelStyle};
pub use render_scene::RenderScene;
pub use surface::{Rgba, StrokeStyle, Surface, TextAnchor};
