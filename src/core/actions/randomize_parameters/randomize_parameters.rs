use crate::core::actions::generate_palette::ports::random_source::RandomSource;
use crate::core::data::render_parameters::RenderParameters;
use crate::core::util::round::{round_half_up, round_to_decimals};

pub const TILE_WIDTH_RANGE: (f64, f64) = (54.0, 124.0);
pub const TILE_HEIGHT_RANGE: (f64, f64) = (22.0, 56.0);
pub const MORTAR_THICKNESS_RANGE: (f64, f64) = (2.0, 6.0);
pub const MORTAR_GRAY_RANGE: (f64, f64) = (185.0, 225.0);
pub const CONTRAST_RANGE: (f64, f64) = (0.75, 0.98);

fn draw<R: RandomSource + ?Sized>(random: &mut R, (min, max): (f64, f64)) -> f64 {
    min + random.next_unit() * (max - min)
}

/// Returns `current` with every numeric control replaced by a random value.
///
/// Draw order is tile width, tile height, row offset, mortar thickness,
/// mortar gray, contrast. The row offset is drawn against the new tile
/// width. The invert flag is carried over unchanged.
pub fn randomize_parameters<R: RandomSource + ?Sized>(
    current: &RenderParameters,
    random: &mut R,
) -> RenderParameters {
    let mut params = *current;

    let tile_width = round_half_up(draw(random, TILE_WIDTH_RANGE));
    params.set_tile_width(tile_width);
    params.set_tile_height(round_half_up(draw(random, TILE_HEIGHT_RANGE)));
    params.set_row_offset(round_half_up(draw(random, (0.0, tile_width))));
    params.set_mortar_thickness(round_half_up(draw(random, MORTAR_THICKNESS_RANGE)));
    params.set_mortar_gray(round_half_up(draw(random, MORTAR_GRAY_RANGE)) as u8);
    params.set_contrast(round_to_decimals(draw(random, CONTRAST_RANGE), 2));

    params
}
