// UI module
// egui rendering of the query console; all state lives in the controller

/// Widgets
pub mod components;
/// Window layout
pub mod layout;

pub use components::*;
pub use layout::render_app_layout;
