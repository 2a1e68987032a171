//! Logical (CSS pixel) size of the drawing area and its device pixel ratio.

/// Largest accepted CSS length per axis.
pub const MAX_CSS_LENGTH: f64 = 16_384.0;
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 8.0;
/// Largest backing surface per axis, in device pixels.
pub const MAX_BACKING_SIZE: u32 = 16_384;

/// Viewport of the drawing surface.
///
/// All layout math runs in CSS pixels; the backing surface holds
/// `floor(css * device_pixel_ratio)` device pixels per axis, capped at
/// `MAX_BACKING_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    css_width: f64,
    css_height: f64,
    device_pixel_ratio: f64,
    backing_width: u32,
    backing_height: u32,
}

fn sanitize_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() {
        device_pixel_ratio.clamp(1.0, MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}

fn sanitize_length(length: f64) -> f64 {
    if length.is_finite() { length.clamp(0.0, MAX_CSS_LENGTH) } else { 0.0 }
}

fn backing_size(css_length: f64, device_pixel_ratio: f64) -> u32 {
    ((css_length * device_pixel_ratio).floor() as u32).min(MAX_BACKING_SIZE)
}

impl Viewport {
    #[must_use]
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let css_width = sanitize_length(css_width);
        let css_height = sanitize_length(css_height);
        let device_pixel_ratio = sanitize_ratio(device_pixel_ratio);

        Self {
            css_width,
            css_height,
            device_pixel_ratio,
            backing_width: backing_size(css_width, device_pixel_ratio),
            backing_height: backing_size(css_height, device_pixel_ratio),
        }
    }

    /// Builds a viewport from a window's physical size and scale factor.
    ///
    /// The backing size is the physical size exactly, so the frame maps 1:1
    /// onto the window's framebuffer.
    #[must_use]
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let device_pixel_ratio = sanitize_ratio(scale_factor);

        Self {
            css_width: f64::from(width) / device_pixel_ratio,
            css_height: f64::from(height) / device_pixel_ratio,
            device_pixel_ratio,
            backing_width: width,
            backing_height: height,
        }
    }

    #[must_use]
    pub fn css_width(&self) -> f64 {
        self.css_width
    }

    #[must_use]
    pub fn css_height(&self) -> f64 {
        self.css_height
    }

    #[must_use]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    #[must_use]
    pub fn backing_width(&self) -> u32 {
        self.backing_width
    }

    #[must_use]
    pub fn backing_height(&self) -> u32 {
        self.backing_height
    }

    /// True when there is nothing to draw, e.g. a minimised window.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backing_width == 0 || self.backing_height == 0
    }
}
