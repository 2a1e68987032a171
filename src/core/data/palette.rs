use crate::core::data::colour::Colour;

pub const SATURATION_MIN: f64 = 72.0;
pub const SATURATION_MAX: f64 = 90.0;

/// A complementary pair of hues sharing one saturation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    hue_a: f64,
    hue_b: f64,
    saturation: f64,
}

impl Palette {
    /// Builds a palette from its first hue. The second hue is always the
    /// complement, 180 degrees around the wheel.
    #[must_use]
    pub fn new(hue_a: f64, saturation: f64) -> Self {
        let hue_a = hue_a.rem_euclid(360.0);

        Self {
            hue_a,
            hue_b: (hue_a + 180.0) % 360.0,
            saturation: saturation.clamp(SATURATION_MIN, SATURATION_MAX),
        }
    }

    #[must_use]
    pub fn hue_a(&self) -> f64 {
        self.hue_a
    }

    #[must_use]
    pub fn hue_b(&self) -> f64 {
        self.hue_b
    }

    #[must_use]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    #[must_use]
    pub fn background(&self) -> Colour {
        Colour::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_b_is_complement() {
        let palette = Palette::new(30.0, 80.0);

        assert_eq!(palette.hue_a(), 30.0);
        assert_eq!(palette.hue_b(), 210.0);
    }

    #[test]
    fn test_hue_b_wraps_past_360() {
        let palette = Palette::new(300.0, 80.0);

        assert_eq!(palette.hue_b(), 120.0);
    }

    #[test]
    fn test_hue_a_is_normalised() {
        let palette = Palette::new(370.0, 80.0);

        assert_eq!(palette.hue_a(), 10.0);
        assert_eq!(palette.hue_b(), 190.0);
    }

    #[test]
    fn test_saturation_is_clamped() {
        assert_eq!(Palette::new(0.0, 10.0).saturation(), SATURATION_MIN);
        assert_eq!(Palette::new(0.0, 99.0).saturation(), SATURATION_MAX);
    }

    #[test]
    fn test_background_is_white() {
        assert_eq!(Palette::new(0.0, 80.0).background(), Colour::WHITE);
    }
}
