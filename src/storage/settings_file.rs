//! JSON settings file for the command-line renderer.
//!
//! ```json
//! {
//!   "parameters": { "tile_width": 80, "contrast": 0.8 },
//!   "mode": "complementary_burst",
//!   "seed": 7
//! }
//! ```
//!
//! Every field is optional. Out-of-range values are clamped on load.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::colour_mode::ColourMode;
use crate::core::data::render_parameters::RenderParameters;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    pub parameters: RenderParameters,
    /// Starting colour mode. Burst mode draws its palette at startup.
    pub mode: ColourMode,
    pub seed: Option<u64>,
}

impl SettingsFile {
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            parameters: self.parameters.sanitized(),
            ..self
        }
    }
}

pub fn parse_settings(json: &str) -> Result<SettingsFile, serde_json::Error> {
    let settings: SettingsFile = serde_json::from_str(json)?;
    Ok(settings.sanitized())
}

pub fn load_settings(path: &Path) -> Result<SettingsFile, SettingsError> {
    let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_settings(&json).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
