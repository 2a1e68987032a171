//! Input adapters: command-line arguments and the interactive window.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
