use thiserror::Error;

use crate::core::actions::rasterize_wall::render::RasterizeError;
use crate::core::actions::resolve_colours::errors::ResolveColoursError;
use crate::core::data::pixel_buffer::PixelBufferError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("no viewport has been set; resize before the first render")]
    NoViewport,
    #[error("colour resolution failed: {0}")]
    Colours(#[from] ResolveColoursError),
    #[error("surface error: {0}")]
    Surface(#[from] PixelBufferError),
    #[error("rasterization failed: {0}")]
    Rasterize(#[from] RasterizeError),
}
