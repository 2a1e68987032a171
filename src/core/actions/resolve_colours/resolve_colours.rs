use crate::core::actions::resolve_colours::errors::ResolveColoursError;
use crate::core::data::colour::Colour;
use crate::core::data::colour_mode::ColourMode;
use crate::core::data::palette::Palette;
use crate::core::data::render_parameters::RenderParameters;
use crate::core::data::resolved_colours::ResolvedColours;
use crate::core::util::round::round_half_up;

const MONO_DARK_RANGE: (f64, f64) = (20.0, 80.0);
const MONO_LIGHT_RANGE: (f64, f64) = (205.0, 245.0);

// Contrast below this gives the burst palette its minimum lightness split.
const BURST_CONTRAST_FLOOR: f64 = 0.4;
const BURST_DARK_LIGHTNESS: (f64, f64) = (18.0, 40.0);
const BURST_LIGHT_LIGHTNESS: (f64, f64) = (60.0, 85.0);

/// Gray levels of the dark and light bricks in black & white mode.
#[must_use]
pub fn monochrome_levels(contrast: f64) -> (u8, u8) {
    let slack = 1.0 - contrast;
    let dark = round_half_up(20.0 + slack * 60.0).clamp(MONO_DARK_RANGE.0, MONO_DARK_RANGE.1);
    let light = round_half_up(245.0 - slack * 40.0).clamp(MONO_LIGHT_RANGE.0, MONO_LIGHT_RANGE.1);

    (dark as u8, light as u8)
}

/// HSL lightness percentages of the dark and light bricks in burst mode.
#[must_use]
pub fn burst_lightness(contrast: f64) -> (f64, f64) {
    let t = ((contrast - BURST_CONTRAST_FLOOR) / (1.0 - BURST_CONTRAST_FLOOR)).clamp(0.0, 1.0);
    let dark = (38.0 - 14.0 * t).clamp(BURST_DARK_LIGHTNESS.0, BURST_DARK_LIGHTNESS.1);
    let light = (62.0 + 18.0 * t).clamp(BURST_LIGHT_LIGHTNESS.0, BURST_LIGHT_LIGHTNESS.1);

    (dark, light)
}

/// Maps the current settings to the four colours of a frame.
///
/// The mortar is always a neutral gray, also in burst mode. Inverting
/// brightness swaps the two brick colours and changes nothing else.
pub fn resolve_colours(
    params: &RenderParameters,
    mode: ColourMode,
    palette: Option<&Palette>,
) -> Result<ResolvedColours, ResolveColoursError> {
    let mortar = Colour::gray(params.mortar_gray());

    let (brick_1, brick_2, background) = match mode {
        ColourMode::Monochrome => {
            let (dark, light) = monochrome_levels(params.contrast());
            (Colour::gray(dark), Colour::gray(light), Colour::WHITE)
        }
        ColourMode::ComplementaryBurst => {
            let palette = palette.ok_or(ResolveColoursError::MissingPalette { mode })?;
            let (dark, light) = burst_lightness(params.contrast());
            (
                Colour::from_hsl(palette.hue_a(), palette.saturation(), dark),
                Colour::from_hsl(palette.hue_b(), palette.saturation(), light),
                palette.background(),
            )
        }
    };

    let (brick_a, brick_b) = if params.invert_brightness() {
        (brick_2, brick_1)
    } else {
        (brick_1, brick_2)
    };

    Ok(ResolvedColours {
        background,
        mortar,
        brick_a,
        brick_b,
    })
}
