use std::path::PathBuf;

use clap::Parser;

use crate::controllers::cli::render_command::{DEFAULT_HEIGHT, DEFAULT_WIDTH, RenderOptions};
use crate::core::data::render_parameters::clamp_gray;
use crate::core::data::viewport::Viewport;
use crate::storage::settings_file::{SettingsError, SettingsFile, load_settings};

/// Render a café wall illusion to a PPM image.
#[derive(Debug, Parser)]
#[command(name = "cafe_wall", version, about)]
pub struct Args {
    /// Width of the wall in CSS pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    /// Height of the wall in CSS pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    /// Device pixel ratio; the image is width*dpr by height*dpr pixels
    #[arg(long, default_value_t = 1.0)]
    pub dpr: f64,

    /// Where to write the image
    #[arg(short, long, default_value = "output/cafe_wall.ppm")]
    pub output: PathBuf,

    /// JSON settings file with starting parameters, mode and seed
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub tile_width: Option<f64>,

    #[arg(long)]
    pub tile_height: Option<f64>,

    #[arg(long)]
    pub row_offset: Option<f64>,

    /// Mortar thickness in CSS pixels
    #[arg(long)]
    pub mortar: Option<f64>,

    /// Mortar gray level, clamped to 0..=255
    #[arg(long, allow_negative_numbers = true)]
    pub mortar_gray: Option<i64>,

    /// Brick contrast, clamped to 0..=1
    #[arg(long)]
    pub contrast: Option<f64>,

    /// Swap the light and dark bricks
    #[arg(long)]
    pub invert: bool,

    /// Randomize every numeric control before rendering
    #[arg(long)]
    pub randomize: bool,

    /// Render in complementary colours with a random palette
    #[arg(long)]
    pub burst: bool,

    /// Seed for --burst and --randomize; overrides the settings file
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Loads the settings file, if any, and layers the command-line
    /// overrides on top of it.
    pub fn render_options(&self) -> Result<(RenderOptions, Option<u64>), SettingsError> {
        let file = match &self.config {
            Some(path) => load_settings(path)?,
            None => SettingsFile::default(),
        };

        Ok(self.apply_overrides(file))
    }

    fn apply_overrides(&self, file: SettingsFile) -> (RenderOptions, Option<u64>) {
        let mut parameters = file.parameters;

        if let Some(value) = self.tile_width {
            parameters.set_tile_width(value);
        }
        if let Some(value) = self.tile_height {
            parameters.set_tile_height(value);
        }
        if let Some(value) = self.row_offset {
            parameters.set_row_offset(value);
        }
        if let Some(value) = self.mortar {
            parameters.set_mortar_thickness(value);
        }
        if let Some(value) = self.mortar_gray {
            parameters.set_mortar_gray(clamp_gray(value));
        }
        if let Some(value) = self.contrast {
            parameters.set_contrast(value);
        }
        if self.invert {
            parameters.set_invert_brightness(true);
        }

        let options = RenderOptions {
            viewport: Viewport::new(self.width, self.height, self.dpr),
            parameters,
            mode: file.mode,
            randomize: self.randomize,
            burst: self.burst,
        };

        (options, self.seed.or(file.seed))
    }
}
