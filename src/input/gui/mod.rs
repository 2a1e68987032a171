//! Interactive window for exploring the illusion.
//!
//! winit owns the window and event loop, pixels holds the framebuffer the
//! wall is copied into, and egui draws the control panel on top.

mod app;
mod control_panel;
pub mod ports;
pub mod run_gui;

pub use run_gui::{GuiError, RunGuiCommand};
