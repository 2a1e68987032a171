use std::ops::RangeInclusive;

use egui::{Color32, Context, Slider, Ui};

use crate::controllers::cafe_wall::{ControlAction, ControlLabels, WallSettings};
use crate::core::data::render_parameters::RenderParameters;
use crate::core::util::round::round_half_up;

pub const TILE_WIDTH_RANGE: RangeInclusive<f64> = 10.0..=200.0;
pub const TILE_HEIGHT_RANGE: RangeInclusive<f64> = 10.0..=120.0;
pub const MORTAR_THICKNESS_RANGE: RangeInclusive<f64> = 0.0..=12.0;
pub const MORTAR_GRAY_RANGE: RangeInclusive<u8> = 0..=255;
pub const CONTRAST_RANGE: RangeInclusive<f64> = 0.0..=1.0;

const PX_STEP: f64 = 1.0;
const CONTRAST_STEP: f64 = 0.01;

/// The row offset slider spans one full tile.
pub fn row_offset_range(params: &RenderParameters) -> RangeInclusive<f64> {
    0.0..=params.tile_width()
}

/// Snaps a pixel control to a whole number of CSS pixels.
pub fn whole_px(value: f64) -> f64 {
    round_half_up(value)
}

fn labelled_slider(ui: &mut Ui, name: &str, slider: Slider<'_>, label: &str) -> bool {
    ui.horizontal(|ui| {
        ui.label(name);
        let changed = ui.add(slider.show_value(false)).changed();
        ui.monospace(label);
        changed
    })
    .inner
}

fn px_slider(value: &mut f64, range: RangeInclusive<f64>) -> Slider<'_> {
    Slider::new(value, range).step_by(PX_STEP)
}

/// Draws the control panel and returns the actions the user triggered this
/// frame, in the order they appear on screen.
pub fn show_control_panel(
    ctx: &Context,
    settings: &WallSettings,
    labels: &ControlLabels,
    last_error: Option<&str>,
) -> Vec<ControlAction> {
    let params = settings.parameters();
    let mut actions = Vec::new();

    let mut tile_width = params.tile_width();
    let mut tile_height = params.tile_height();
    let mut row_offset = params.row_offset();
    let mut mortar_thickness = params.mortar_thickness();
    let mut mortar_gray = params.mortar_gray();
    let mut contrast = params.contrast();
    let mut invert = params.invert_brightness();

    egui::Window::new("Café wall")
        .default_pos([10.0, 10.0])
        .default_width(300.0)
        .show(ctx, |ui| {
            let slider = px_slider(&mut tile_width, TILE_WIDTH_RANGE);
            if labelled_slider(ui, "Tile width", slider, &labels.tile_width) {
                actions.push(ControlAction::SetTileWidth(whole_px(tile_width)));
            }

            let slider = px_slider(&mut tile_height, TILE_HEIGHT_RANGE);
            if labelled_slider(ui, "Tile height", slider, &labels.tile_height) {
                actions.push(ControlAction::SetTileHeight(whole_px(tile_height)));
            }

            let slider = px_slider(&mut row_offset, row_offset_range(params));
            if labelled_slider(ui, "Row offset", slider, &labels.row_offset) {
                actions.push(ControlAction::SetRowOffset(whole_px(row_offset)));
            }

            let slider = px_slider(&mut mortar_thickness, MORTAR_THICKNESS_RANGE);
            if labelled_slider(ui, "Mortar", slider, &labels.mortar_thickness) {
                actions.push(ControlAction::SetMortarThickness(whole_px(mortar_thickness)));
            }

            let slider = Slider::new(&mut mortar_gray, MORTAR_GRAY_RANGE);
            if labelled_slider(ui, "Mortar gray", slider, &labels.mortar_gray) {
                actions.push(ControlAction::SetMortarGray(mortar_gray));
            }

            let slider = Slider::new(&mut contrast, CONTRAST_RANGE).step_by(CONTRAST_STEP);
            if labelled_slider(ui, "Contrast", slider, &labels.contrast) {
                actions.push(ControlAction::SetContrast(contrast));
            }

            if ui.checkbox(&mut invert, "Invert brightness").changed() {
                actions.push(ControlAction::SetInvertBrightness(invert));
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Burst").clicked() {
                    actions.push(ControlAction::Burst);
                }
                if ui.button("Randomize").clicked() {
                    actions.push(ControlAction::Randomize);
                }
                if ui.button("Reset").clicked() {
                    actions.push(ControlAction::Reset);
                }
            });

            ui.label(format!("Mode: {}", settings.mode().display_name()));

            if let Some(message) = last_error {
                ui.separator();
                ui.colored_label(Color32::LIGHT_RED, message);
            }
        });

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_offset_range_follows_tile_width() {
        let mut params = RenderParameters::default();
        params.set_tile_width(120.0);

        assert_eq!(row_offset_range(&params), 0.0..=120.0);
    }

    #[test]
    fn test_defaults_fit_slider_ranges() {
        let params = RenderParameters::default();

        assert!(TILE_WIDTH_RANGE.contains(&params.tile_width()));
        assert!(TILE_HEIGHT_RANGE.contains(&params.tile_height()));
        assert!(row_offset_range(&params).contains(&params.row_offset()));
        assert!(MORTAR_THICKNESS_RANGE.contains(&params.mortar_thickness()));
        assert!(CONTRAST_RANGE.contains(&params.contrast()));
    }

    #[test]
    fn test_px_slider_values_keep_whole_pixel_labels() {
        let mut params = RenderParameters::default();
        params.set_tile_width(whole_px(72.5));
        params.set_mortar_thickness(whole_px(2.4));

        let labels = ControlLabels::from_parameters(&params);

        assert_eq!(labels.tile_width, "73px");
        assert_eq!(labels.mortar_thickness, "2px");
    }

    #[test]
    fn test_idle_frame_produces_no_actions() {
        let ctx = Context::default();
        let settings = WallSettings::default();
        let labels = ControlLabels::from_parameters(settings.parameters());
        let mut actions = Vec::new();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            actions = show_control_panel(ctx, &settings, &labels, None);
        });

        assert!(actions.is_empty());
    }
}
