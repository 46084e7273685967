//! UI-Layer mit egui: Pointer-Input, Shortcuts, Toolbar und Status-Bar.

pub mod input;
mod keyboard;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use keyboard::collect_keyboard_intents;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
