//! Rendering: Szene malen, Display-Liste, Frame-Schleife, egui-Ausgabe.

mod draw_list;
mod egui_surface;
mod frame_loop;
mod scene_painter;

pub use crate::shared::{RenderScene, Surface};
pub use draw_list::{DrawCommand, DrawList};
pub use egui_surface::{to_color32, EguiSurface};
pub use frame_loop::RenderLoop;
pub use scene_painter::paint_scene;
