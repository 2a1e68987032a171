use crate::core::data::colour::Colour;
use crate::core::data::render_parameters::RenderParameters;
use crate::core::data::resolved_colours::ResolvedColours;
use crate::core::util::round::round_half_up;

/// Tiles drawn past each horizontal edge so offset rows never leave a gap.
pub const HORIZONTAL_OVERDRAW_TILES: f64 = 2.0;

/// A solid rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub colour: Colour,
}

impl FillRect {
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Number of brick rows needed to cover `css_height`, plus one spare row.
#[must_use]
pub fn row_count(params: &RenderParameters, css_height: f64) -> u32 {
    (css_height / params.row_step()).ceil() as u32 + 1
}

/// Horizontal shift of a row: odd rows move right by the row offset.
#[must_use]
pub fn row_offset_px(params: &RenderParameters, row: u32) -> f64 {
    if row % 2 == 0 { 0.0 } else { params.row_offset() }
}

/// Mortar strips, one below every row band down to and including `css_height`.
pub fn mortar_strips(
    params: &RenderParameters,
    colours: &ResolvedColours,
    css_width: f64,
    css_height: f64,
) -> Vec<FillRect> {
    let mut strips = Vec::new();

    if params.mortar_thickness() <= 0.0 {
        return strips;
    }

    let step = params.row_step();
    let mut y = 0.0;

    while y <= css_height {
        strips.push(FillRect {
            x: 0.0,
            y: y + params.tile_height(),
            width: css_width,
            height: params.mortar_thickness(),
            colour: colours.mortar,
        });
        y += step;
    }

    strips
}

/// Tiles of one row, left to right, alternating brick A and brick B.
pub fn brick_row(
    params: &RenderParameters,
    colours: &ResolvedColours,
    row: u32,
    css_width: f64,
) -> Vec<FillRect> {
    let tile_width = params.tile_width();
    let overdraw = HORIZONTAL_OVERDRAW_TILES * tile_width;
    let y = round_half_up(f64::from(row) * params.row_step());

    let mut tiles = Vec::new();
    let mut x = -overdraw + row_offset_px(params, row);
    let mut index = 0;

    while x < css_width + overdraw {
        tiles.push(FillRect {
            x: round_half_up(x),
            y,
            width: tile_width,
            height: params.tile_height(),
            colour: colours.brick(index),
        });
        x += tile_width;
        index += 1;
    }

    tiles
}

/// Builds the paint list for one frame in painting order: mortar strips
/// first, then every brick row from top to bottom. The background fill is
/// not part of the plan.
pub fn plan_wall(
    params: &RenderParameters,
    colours: &ResolvedColours,
    css_width: f64,
    css_height: f64,
) -> Vec<FillRect> {
    let mut plan = mortar_strips(params, colours, css_width, css_height);

    for row in 0..row_count(params, css_height) {
        plan.extend(brick_row(params, colours, row, css_width));
    }

    plan
}
