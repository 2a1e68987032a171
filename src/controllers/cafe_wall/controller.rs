use log::debug;

use crate::controllers::cafe_wall::actions::ControlAction;
use crate::controllers::cafe_wall::errors::RenderError;
use crate::controllers::cafe_wall::labels::ControlLabels;
use crate::controllers::cafe_wall::settings::WallSettings;
use crate::core::actions::generate_palette::generate_palette::generate_palette;
use crate::core::actions::generate_palette::ports::random_source::RandomSource;
use crate::core::actions::randomize_parameters::randomize_parameters::randomize_parameters;
use crate::core::actions::rasterize_wall::render::render;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;

/// Owns the mutable settings and the drawing surface.
///
/// Every control change, action or resize redraws the frame synchronously
/// once a non-empty viewport is known. The rendering core only ever sees
/// immutable snapshots of the settings.
pub struct CafeWallController<R: RandomSource> {
    settings: WallSettings,
    viewport: Option<Viewport>,
    surface: Option<PixelBuffer>,
    random: R,
    frames_rendered: u64,
}

impl<R: RandomSource> CafeWallController<R> {
    pub fn new(random: R) -> Self {
        Self::with_settings(WallSettings::default(), random)
    }

    pub fn with_settings(settings: WallSettings, random: R) -> Self {
        Self {
            settings,
            viewport: None,
            surface: None,
            random,
            frames_rendered: 0,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &WallSettings {
        &self.settings
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// The most recently rendered frame.
    #[must_use]
    pub fn frame(&self) -> Option<&PixelBuffer> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn labels(&self) -> ControlLabels {
        ControlLabels::from_parameters(self.settings.parameters())
    }

    /// Replaces all settings at once, e.g. from a settings file, and redraws.
    pub fn load_settings(&mut self, settings: WallSettings) -> Result<(), RenderError> {
        debug!("loading settings in {} mode", settings.mode());

        self.settings = settings;
        self.redraw()
    }

    /// Applies one control input and redraws.
    pub fn handle(&mut self, action: ControlAction) -> Result<(), RenderError> {
        self.apply(action);
        self.redraw()
    }

    /// Adopts a new viewport and redraws at the new size.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), RenderError> {
        debug!(
            "viewport {}x{} css px at ratio {} ({}x{} device px)",
            viewport.css_width(),
            viewport.css_height(),
            viewport.device_pixel_ratio(),
            viewport.backing_width(),
            viewport.backing_height()
        );

        self.viewport = Some(viewport);
        self.redraw()
    }

    /// Renders the current settings into the surface and returns the frame.
    pub fn render(&mut self) -> Result<&PixelBuffer, RenderError> {
        let viewport = self.viewport.ok_or(RenderError::NoViewport)?;
        let colours = self.settings.colours()?;

        let surface = match self.surface.take() {
            Some(surface)
                if surface.matches_size(viewport.backing_width(), viewport.backing_height()) =>
            {
                surface
            }
            _ => PixelBuffer::new(viewport.backing_width(), viewport.backing_height())?,
        };

        let surface = self.surface.insert(surface);
        render(surface, &viewport, self.settings.parameters(), &colours)?;
        self.frames_rendered += 1;

        Ok(&*surface)
    }

    fn redraw(&mut self) -> Result<(), RenderError> {
        match self.viewport {
            Some(viewport) if !viewport.is_empty() => self.render().map(|_| ()),
            Some(_) => {
                debug!("viewport is empty, skipping redraw");
                Ok(())
            }
            None => {
                debug!("no viewport yet, skipping redraw");
                Ok(())
            }
        }
    }

    fn apply(&mut self, action: ControlAction) {
        debug!("control action: {:?}", action);

        let params = self.settings.parameters_mut();

        match action {
            ControlAction::SetTileWidth(value) => params.set_tile_width(value),
            ControlAction::SetTileHeight(value) => params.set_tile_height(value),
            ControlAction::SetRowOffset(value) => params.set_row_offset(value),
            ControlAction::SetMortarThickness(value) => params.set_mortar_thickness(value),
            ControlAction::SetMortarGray(value) => params.set_mortar_gray(value),
            ControlAction::SetContrast(value) => params.set_contrast(value),
            ControlAction::SetInvertBrightness(value) => params.set_invert_brightness(value),
            ControlAction::Burst => {
                let palette = generate_palette(&mut self.random);
                debug!(
                    "burst palette: hues {:.1}/{:.1}, saturation {:.1}",
                    palette.hue_a(),
                    palette.hue_b(),
                    palette.saturation()
                );
                self.settings.enter_burst(palette);
            }
            ControlAction::Randomize => {
                let randomized = randomize_parameters(self.settings.parameters(), &mut self.random);
                *self.settings.parameters_mut() = randomized;
            }
            ControlAction::Reset => self.settings.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::colour_mode::ColourMode;
    use crate::core::data::palette::Palette;
    use crate::core::data::pixel_buffer::PixelBufferError;
    use crate::core::data::render_parameters::RenderParameters;

    struct StubConstant(f64);

    impl RandomSource for StubConstant {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    fn controller_with_viewport() -> CafeWallController<StubConstant> {
        let mut controller = CafeWallController::new(StubConstant(0.25));
        controller.resize(Viewport::new(200.0, 100.0, 1.0)).unwrap();
        controller
    }

    #[test]
    fn test_render_before_viewport_fails() {
        let mut controller = CafeWallController::new(StubConstant(0.5));

        assert_eq!(controller.render().unwrap_err(), RenderError::NoViewport);
    }

    #[test]
    fn test_changes_before_viewport_are_kept_without_rendering() {
        let mut controller = CafeWallController::new(StubConstant(0.5));

        controller.handle(ControlAction::SetTileWidth(90.0)).unwrap();

        assert_eq!(controller.settings().parameters().tile_width(), 90.0);
        assert_eq!(controller.frames_rendered(), 0);
        assert!(controller.frame().is_none());
    }

    #[test]
    fn test_resize_renders_first_frame() {
        let controller = controller_with_viewport();
        let frame = controller.frame().unwrap();

        assert_eq!(controller.frames_rendered(), 1);
        assert_eq!(frame.width(), 200);
        assert_eq!(frame.height(), 100);
        assert_eq!(frame.pixel(0, 0), Some(Colour::gray(25)));
    }

    #[test]
    fn test_every_change_redraws_once() {
        let mut controller = controller_with_viewport();

        controller.handle(ControlAction::SetContrast(0.5)).unwrap();
        controller.handle(ControlAction::SetInvertBrightness(true)).unwrap();

        assert_eq!(controller.frames_rendered(), 3);
    }

    #[test]
    fn test_invert_swaps_first_tile_colour() {
        let mut controller = controller_with_viewport();

        controller.handle(ControlAction::SetInvertBrightness(true)).unwrap();

        assert_eq!(controller.frame().unwrap().pixel(0, 0), Some(Colour::gray(242)));
    }

    #[test]
    fn test_resize_reallocates_surface() {
        let mut controller = controller_with_viewport();

        controller.resize(Viewport::new(50.0, 40.0, 2.0)).unwrap();

        let frame = controller.frame().unwrap();
        assert_eq!((frame.width(), frame.height()), (100, 80));
    }

    #[test]
    fn test_empty_viewport_skips_redraw() {
        let mut controller = controller_with_viewport();

        controller.resize(Viewport::new(0.0, 0.0, 1.0)).unwrap();

        assert_eq!(controller.frames_rendered(), 1);
        assert!(matches!(
            controller.render(),
            Err(RenderError::Surface(PixelBufferError::EmptySurface { .. }))
        ));
    }

    #[test]
    fn test_burst_uses_injected_randomness() {
        let mut controller = controller_with_viewport();

        controller.handle(ControlAction::Burst).unwrap();

        let settings = controller.settings();
        assert_eq!(settings.mode(), ColourMode::ComplementaryBurst);
        assert_eq!(settings.palette(), Some(&Palette::new(90.0, 76.5)));

        let colours = settings.colours().unwrap();
        assert_eq!(controller.frame().unwrap().pixel(0, 0), Some(colours.brick_a));
    }

    #[test]
    fn test_randomize_keeps_mode_and_palette() {
        let mut controller = controller_with_viewport();
        controller.handle(ControlAction::Burst).unwrap();
        let palette = controller.settings().palette().copied();

        controller.handle(ControlAction::Randomize).unwrap();

        let settings = controller.settings();
        assert_eq!(settings.mode(), ColourMode::ComplementaryBurst);
        assert_eq!(settings.palette().copied(), palette);
        assert_eq!(settings.parameters().tile_width(), 72.0);
        assert_eq!(settings.parameters().tile_height(), 31.0);
    }

    #[test]
    fn test_reset_restores_defaults_after_burst() {
        let mut controller = controller_with_viewport();
        controller.handle(ControlAction::SetMortarGray(100)).unwrap();
        controller.handle(ControlAction::SetInvertBrightness(true)).unwrap();
        controller.handle(ControlAction::Randomize).unwrap();
        controller.handle(ControlAction::Burst).unwrap();

        controller.handle(ControlAction::Reset).unwrap();

        let settings = controller.settings();
        assert_eq!(settings.parameters(), &RenderParameters::default());
        assert_eq!(settings.mode(), ColourMode::Monochrome);
        assert!(settings.palette().is_none());
        assert_eq!(controller.frame().unwrap().pixel(0, 0), Some(Colour::gray(25)));
    }

    #[test]
    fn test_load_settings_replaces_everything() {
        let mut controller = controller_with_viewport();
        let mut params = RenderParameters::default();
        params.set_invert_brightness(true);

        controller.load_settings(WallSettings::new(params)).unwrap();

        assert_eq!(controller.settings().parameters(), &params);
        assert_eq!(controller.frames_rendered(), 2);
    }

    #[test]
    fn test_labels_follow_parameters() {
        let mut controller = controller_with_viewport();

        controller.handle(ControlAction::SetTileHeight(40.0)).unwrap();

        assert_eq!(controller.labels().tile_height, "40px");
    }
}
