use crate::core::actions::generate_palette::ports::random_source::RandomSource;
use crate::core::data::palette::{Palette, SATURATION_MAX, SATURATION_MIN};

/// Draws a fresh complementary palette.
///
/// Consumes two values from `random`: the first hue, then the saturation.
pub fn generate_palette<R: RandomSource + ?Sized>(random: &mut R) -> Palette {
    let hue_a = random.next_unit() * 360.0;
    let saturation = SATURATION_MIN + random.next_unit() * (SATURATION_MAX - SATURATION_MIN);

    Palette::new(hue_a, saturation)
}
