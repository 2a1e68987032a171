use log::trace;
use thiserror::Error;

use crate::core::actions::rasterize_wall::plan_wall::plan_wall;
use crate::core::actions::rasterize_wall::rasterize_plan::rasterize_plan;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_parameters::RenderParameters;
use crate::core::data::resolved_colours::ResolvedColours;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RasterizeError {
    #[error(
        "surface is {surface_width}x{surface_height} but the viewport needs {backing_width}x{backing_height}"
    )]
    SurfaceSizeMismatch {
        surface_width: u32,
        surface_height: u32,
        backing_width: u32,
        backing_height: u32,
    },
}

/// Draws one café wall frame onto `surface`.
///
/// The surface is cleared to the background colour, then the mortar strips
/// and brick rows are painted in CSS pixels scaled by the viewport's device
/// pixel ratio.
pub fn render(
    surface: &mut PixelBuffer,
    viewport: &Viewport,
    params: &RenderParameters,
    colours: &ResolvedColours,
) -> Result<(), RasterizeError> {
    if !surface.matches_size(viewport.backing_width(), viewport.backing_height()) {
        return Err(RasterizeError::SurfaceSizeMismatch {
            surface_width: surface.width(),
            surface_height: surface.height(),
            backing_width: viewport.backing_width(),
            backing_height: viewport.backing_height(),
        });
    }

    surface.fill(colours.background);

    let plan = plan_wall(params, colours, viewport.css_width(), viewport.css_height());
    trace!(
        "painting {} rects onto {}x{} surface",
        plan.len(),
        surface.width(),
        surface.height()
    );

    rasterize_plan(&plan, surface, viewport.device_pixel_ratio());

    Ok(())
}
