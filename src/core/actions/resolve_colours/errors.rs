use crate::core::data::colour_mode::ColourMode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveColoursError {
    #[error("{mode} colour mode requires a palette, but none was generated")]
    MissingPalette { mode: ColourMode },
}
