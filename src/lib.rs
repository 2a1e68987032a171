pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;
pub mod storage;

pub use adapters::rand_source::RngSource;
pub use controllers::cafe_wall::{
    CafeWallController, ControlAction, ControlLabels, RenderError, WallSettings,
};
pub use controllers::cli::render_command::{CliRenderController, CliRenderError, RenderOptions};
pub use crate::core::data::colour_mode::ColourMode;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::render_parameters::RenderParameters;
pub use crate::core::data::viewport::Viewport;
pub use input::cli::args::Args;
#[cfg(feature = "gui")]
pub use input::gui::{GuiError, RunGuiCommand};
pub use presenters::file::ppm::PpmFilePresenter;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
pub use storage::settings_file::{SettingsError, SettingsFile, load_settings};
