//! Application State — zentrale Datenhaltung.

mod app_state;
mod selection;
mod toggles;
mod view;

pub use app_state::AppState;
pub use selection::SelectionState;
pub use toggles::OverlayToggles;
pub use view::ViewState;
