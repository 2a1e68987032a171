//! Conversion from the renderer's packed RGB surface to RGBA framebuffers.

use thiserror::Error;

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("framebuffer holds {actual} bytes but a {width}x{height} frame needs {expected}")]
pub struct FrameSizeMismatch {
    pub width: u32,
    pub height: u32,
    pub expected: usize,
    pub actual: usize,
}

/// Copies `src` into an RGBA framebuffer of the same dimensions, with
/// every pixel fully opaque.
pub fn copy_rgb_to_rgba(src: &PixelBuffer, dst: &mut [u8]) -> Result<(), FrameSizeMismatch> {
    let expected = src.width() as usize * src.height() as usize * RGBA_BYTES_PER_PIXEL;

    if dst.len() != expected {
        return Err(FrameSizeMismatch {
            width: src.width(),
            height: src.height(),
            expected,
            actual: dst.len(),
        });
    }

    let pixels = src.buffer().chunks_exact(BYTES_PER_PIXEL);

    for (rgb, rgba) in pixels.zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL)) {
        rgba[..BYTES_PER_PIXEL].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    Ok(())
}
