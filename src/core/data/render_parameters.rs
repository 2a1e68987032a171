use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_TILE_WIDTH: f64 = 72.0;
pub const DEFAULT_TILE_HEIGHT: f64 = 34.0;
pub const DEFAULT_ROW_OFFSET: f64 = 36.0;
pub const DEFAULT_MORTAR_THICKNESS: f64 = 3.0;
pub const DEFAULT_MORTAR_GRAY: u8 = 205;
pub const DEFAULT_CONTRAST: f64 = 0.92;

pub const MIN_TILE_SIZE: f64 = 1.0;
/// Upper bound for every length control, in CSS pixels.
pub const MAX_LENGTH: f64 = 10_000.0;

/// Geometry and brightness settings for one café wall frame.
///
/// Every setter clamps its input, so a value of this type is always safe to
/// hand to the rasterizer. Non-finite input falls back to the field default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParameters {
    tile_width: f64,
    tile_height: f64,
    row_offset: f64,
    mortar_thickness: f64,
    #[serde(deserialize_with = "deserialize_gray")]
    mortar_gray: u8,
    contrast: f64,
    invert_brightness: bool,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            row_offset: DEFAULT_ROW_OFFSET,
            mortar_thickness: DEFAULT_MORTAR_THICKNESS,
            mortar_gray: DEFAULT_MORTAR_GRAY,
            contrast: DEFAULT_CONTRAST,
            invert_brightness: false,
        }
    }
}

fn clamp_length(value: f64, min: f64, fallback: f64) -> f64 {
    if value.is_finite() { value.clamp(min, MAX_LENGTH) } else { fallback }
}

fn deserialize_gray<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    Ok(clamp_gray(raw))
}

#[must_use]
pub fn clamp_gray(level: i64) -> u8 {
    level.clamp(0, 255) as u8
}

impl RenderParameters {
    #[must_use]
    pub fn tile_width(&self) -> f64 {
        self.tile_width
    }

    #[must_use]
    pub fn tile_height(&self) -> f64 {
        self.tile_height
    }

    #[must_use]
    pub fn row_offset(&self) -> f64 {
        self.row_offset
    }

    #[must_use]
    pub fn mortar_thickness(&self) -> f64 {
        self.mortar_thickness
    }

    #[must_use]
    pub fn mortar_gray(&self) -> u8 {
        self.mortar_gray
    }

    #[must_use]
    pub fn contrast(&self) -> f64 {
        self.contrast
    }

    #[must_use]
    pub fn invert_brightness(&self) -> bool {
        self.invert_brightness
    }

    /// Vertical distance between the tops of two consecutive brick rows.
    #[must_use]
    pub fn row_step(&self) -> f64 {
        self.tile_height + self.mortar_thickness
    }

    pub fn set_tile_width(&mut self, tile_width: f64) {
        self.tile_width = clamp_length(tile_width, MIN_TILE_SIZE, DEFAULT_TILE_WIDTH);
    }

    pub fn set_tile_height(&mut self, tile_height: f64) {
        self.tile_height = clamp_length(tile_height, MIN_TILE_SIZE, DEFAULT_TILE_HEIGHT);
    }

    pub fn set_row_offset(&mut self, row_offset: f64) {
        self.row_offset = clamp_length(row_offset, 0.0, DEFAULT_ROW_OFFSET);
    }

    pub fn set_mortar_thickness(&mut self, mortar_thickness: f64) {
        self.mortar_thickness = clamp_length(mortar_thickness, 0.0, DEFAULT_MORTAR_THICKNESS);
    }

    pub fn set_mortar_gray(&mut self, mortar_gray: u8) {
        self.mortar_gray = mortar_gray;
    }

    pub fn set_contrast(&mut self, contrast: f64) {
        self.contrast = if contrast.is_finite() {
            contrast.clamp(0.0, 1.0)
        } else {
            DEFAULT_CONTRAST
        };
    }

    pub fn set_invert_brightness(&mut self, invert_brightness: bool) {
        self.invert_brightness = invert_brightness;
    }

    /// Re-applies every clamp. Used after deserializing, where serde writes
    /// the fields directly.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let mut params = Self {
            mortar_gray: self.mortar_gray,
            invert_brightness: self.invert_brightness,
            ..Self::default()
        };

        params.set_tile_width(self.tile_width);
        params.set_tile_height(self.tile_height);
        params.set_row_offset(self.row_offset);
        params.set_mortar_thickness(self.mortar_thickness);
        params.set_contrast(self.contrast);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reset_values() {
        let params = RenderParameters::default();

        assert_eq!(params.tile_width(), 72.0);
        assert_eq!(params.tile_height(), 34.0);
        assert_eq!(params.row_offset(), 36.0);
        assert_eq!(params.mortar_thickness(), 3.0);
        assert_eq!(params.mortar_gray(), 205);
        assert_eq!(params.contrast(), 0.92);
        assert!(!params.invert_brightness());
        assert_eq!(params.row_step(), 37.0);
    }

    #[test]
    fn test_setters_clamp_to_valid_ranges() {
        let mut params = RenderParameters::default();

        params.set_tile_width(0.0);
        params.set_tile_height(-5.0);
        params.set_row_offset(-1.0);
        params.set_mortar_thickness(-3.0);
        params.set_contrast(1.7);

        assert_eq!(params.tile_width(), MIN_TILE_SIZE);
        assert_eq!(params.tile_height(), MIN_TILE_SIZE);
        assert_eq!(params.row_offset(), 0.0);
        assert_eq!(params.mortar_thickness(), 0.0);
        assert_eq!(params.contrast(), 1.0);

        params.set_contrast(-0.2);
        assert_eq!(params.contrast(), 0.0);
    }

    #[test]
    fn test_huge_lengths_are_capped() {
        let mut params = RenderParameters::default();

        params.set_tile_width(1e308);
        params.set_tile_height(1e308);
        params.set_row_offset(f64::MAX);
        params.set_mortar_thickness(1e20);

        assert_eq!(params.tile_width(), MAX_LENGTH);
        assert_eq!(params.tile_height(), MAX_LENGTH);
        assert_eq!(params.row_offset(), MAX_LENGTH);
        assert_eq!(params.mortar_thickness(), MAX_LENGTH);
        assert!(params.row_step().is_finite());
    }

    #[test]
    fn test_deserialize_caps_huge_lengths() {
        let params: RenderParameters =
            serde_json::from_str(r#"{ "tile_width": 1e308, "row_offset": 1e300 }"#).unwrap();
        let params = params.sanitized();

        assert_eq!(params.tile_width(), MAX_LENGTH);
        assert_eq!(params.row_offset(), MAX_LENGTH);
    }

    #[test]
    fn test_non_finite_values_fall_back_to_defaults() {
        let mut params = RenderParameters::default();
        params.set_tile_width(10.0);

        params.set_tile_width(f64::NAN);
        params.set_contrast(f64::INFINITY);

        assert_eq!(params.tile_width(), DEFAULT_TILE_WIDTH);
        assert_eq!(params.contrast(), DEFAULT_CONTRAST);
    }

    #[test]
    fn test_clamp_gray() {
        assert_eq!(clamp_gray(-20), 0);
        assert_eq!(clamp_gray(128), 128);
        assert_eq!(clamp_gray(300), 255);
    }

    #[test]
    fn test_deserialize_partial_json_uses_defaults() {
        let params: RenderParameters =
            serde_json::from_str(r#"{ "tile_width": 90, "invert_brightness": true }"#).unwrap();

        assert_eq!(params.tile_width(), 90.0);
        assert_eq!(params.tile_height(), DEFAULT_TILE_HEIGHT);
        assert!(params.invert_brightness());
    }

    #[test]
    fn test_deserialize_clamps_out_of_range_values() {
        let params: RenderParameters =
            serde_json::from_str(r#"{ "mortar_gray": 400, "contrast": 3.0, "tile_height": 0 }"#)
                .unwrap();
        let params = params.sanitized();

        assert_eq!(params.mortar_gray(), 255);
        assert_eq!(params.contrast(), 1.0);
        assert_eq!(params.tile_height(), MIN_TILE_SIZE);
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let mut params = RenderParameters::default();
        params.set_tile_width(100.0);
        params.set_mortar_gray(190);
        params.set_invert_brightness(true);

        assert_eq!(params.sanitized(), params);
    }
}
