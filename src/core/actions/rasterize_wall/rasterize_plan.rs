use rayon::prelude::*;

use crate::core::actions::rasterize_wall::plan_wall::FillRect;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::util::round::round_half_up;

/// A [`FillRect`] after scaling to device pixels and clipping to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceRect {
    pub x0: usize,
    pub x1: usize,
    pub y0: usize,
    pub y1: usize,
    pub colour: Colour,
}

/// Maps the CSS span `[start, start + length)` to device pixels, snapping
/// both edges to the pixel grid. Returns `None` if nothing is left after
/// clipping to `[0, limit)`.
#[must_use]
pub fn device_span(start: f64, length: f64, scale: f64, limit: u32) -> Option<(usize, usize)> {
    let limit = f64::from(limit);
    let begin = round_half_up(start * scale).clamp(0.0, limit);
    let end = round_half_up((start + length) * scale).clamp(0.0, limit);

    if begin >= end {
        return None;
    }

    Some((begin as usize, end as usize))
}

#[must_use]
pub fn to_device_rect(rect: &FillRect, scale: f64, width: u32, height: u32) -> Option<DeviceRect> {
    let (x0, x1) = device_span(rect.x, rect.width, scale, width)?;
    let (y0, y1) = device_span(rect.y, rect.height, scale, height)?;

    Some(DeviceRect {
        x0,
        x1,
        y0,
        y1,
        colour: rect.colour,
    })
}

fn fill_span(row: &mut [u8], x0: usize, x1: usize, colour: Colour) {
    for pixel in row[x0 * BYTES_PER_PIXEL..x1 * BYTES_PER_PIXEL].chunks_exact_mut(BYTES_PER_PIXEL) {
        pixel[0] = colour.r;
        pixel[1] = colour.g;
        pixel[2] = colour.b;
    }
}

/// Paints `plan` onto `surface` after scaling every rectangle by `scale`.
///
/// Rows of the surface are filled in parallel. Each row applies the
/// rectangles in plan order, so the output is the same as painting the
/// rectangles one after another.
pub fn rasterize_plan(plan: &[FillRect], surface: &mut PixelBuffer, scale: f64) {
    let width = surface.width();
    let height = surface.height();
    let stride = surface.stride();

    let device_rects: Vec<DeviceRect> = plan
        .iter()
        .filter_map(|rect| to_device_rect(rect, scale, width, height))
        .collect();

    surface
        .data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            for rect in device_rects.iter().filter(|r| r.y0 <= y && y < r.y1) {
                fill_span(row, rect.x0, rect.x1, rect.colour);
            }
        });
}

/// Sequential reference painter, used to check the parallel one.
#[cfg(test)]
fn rasterize_plan_sequential(plan: &[FillRect], surface: &mut PixelBuffer, scale: f64) {
    let width = surface.width();
    let height = surface.height();
    let stride = surface.stride();
    let data = surface.data_mut();

    for rect in plan.iter().filter_map(|r| to_device_rect(r, scale, width, height)) {
        for y in rect.y0..rect.y1 {
            fill_span(&mut data[y * stride..(y + 1) * stride], rect.x0, rect.x1, rect.colour);
        }
    }
}
