//! Control binding for the café wall renderer.
//!
//! The controller is the only place that mutates settings. It turns control
//! panel input into new settings and redraws through the pure rendering core
//! in `core/`.

pub mod actions;
mod controller;
pub mod errors;
pub mod labels;
pub mod settings;

pub use actions::ControlAction;
pub use controller::CafeWallController;
pub use errors::RenderError;
pub use labels::ControlLabels;
pub use settings::WallSettings;
