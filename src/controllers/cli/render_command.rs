use std::path::Path;
use std::time::Instant;

use log::info;
use thiserror::Error;

use crate::controllers::cafe_wall::{CafeWallController, ControlAction, RenderError, WallSettings};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_palette::ports::random_source::RandomSource;
use crate::core::data::colour_mode::ColourMode;
use crate::core::data::render_parameters::RenderParameters;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Error)]
pub enum CliRenderError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("nothing has been rendered yet")]
    NothingRendered,
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}

pub const DEFAULT_WIDTH: f64 = 1200.0;
pub const DEFAULT_HEIGHT: f64 = 800.0;

/// Everything needed to render one frame without a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub viewport: Viewport,
    pub parameters: RenderParameters,
    pub mode: ColourMode,
    pub randomize: bool,
    pub burst: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, 1.0),
            parameters: RenderParameters::default(),
            mode: ColourMode::default(),
            randomize: false,
            burst: false,
        }
    }
}

/// Renders a single frame through the control binder and hands it to a
/// file presenter.
pub struct CliRenderController<P: FilePresenterPort, R: RandomSource> {
    presenter: P,
    controller: CafeWallController<R>,
}

impl<P: FilePresenterPort, R: RandomSource> CliRenderController<P, R> {
    pub fn new(presenter: P, random: R) -> Self {
        Self {
            presenter,
            controller: CafeWallController::new(random),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &WallSettings {
        self.controller.settings()
    }

    /// Applies the options as control input, in order: starting
    /// parameters, starting mode, randomize, burst. The frame is drawn once
    /// the viewport is set.
    pub fn generate(&mut self, options: &RenderOptions) -> Result<(), CliRenderError> {
        self.controller.load_settings(WallSettings::new(options.parameters))?;

        if options.mode == ColourMode::ComplementaryBurst {
            self.controller.handle(ControlAction::Burst)?;
        }
        if options.randomize {
            self.controller.handle(ControlAction::Randomize)?;
        }
        if options.burst {
            self.controller.handle(ControlAction::Burst)?;
        }

        info!(
            "rendering {}x{} px ({} mode)",
            options.viewport.backing_width(),
            options.viewport.backing_height(),
            self.controller.settings().mode()
        );

        let start = Instant::now();
        self.controller.resize(options.viewport)?;
        if self.controller.frame().is_none() {
            self.controller.render()?;
        }
        info!("rendered in {:?}", start.elapsed());

        Ok(())
    }

    pub fn write(&self, filepath: &Path) -> Result<(), CliRenderError> {
        let frame = self.controller.frame().ok_or(CliRenderError::NothingRendered)?;
        self.presenter.present(frame, filepath)?;
        info!("wrote {}", filepath.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    use crate::core::data::colour::Colour;
    use crate::core::data::palette::Palette;
    use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};

    struct StubConstant(f64);

    impl RandomSource for StubConstant {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[derive(Default)]
    struct StubPresenterRecorder {
        written: RefCell<Vec<(PathBuf, u32, u32)>>,
    }

    impl FilePresenterPort for StubPresenterRecorder {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.width(), buffer.height()));
            Ok(())
        }
    }

    struct StubPresenterFailure;

    impl FilePresenterPort for StubPresenterFailure {
        fn present(&self, _buffer: &PixelBuffer, _filepath: &Path) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    fn small_options() -> RenderOptions {
        RenderOptions {
            viewport: Viewport::new(120.0, 60.0, 2.0),
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_generate_then_write_presents_backing_size() {
        let mut controller =
            CliRenderController::new(StubPresenterRecorder::default(), StubConstant(0.5));

        controller.generate(&small_options()).unwrap();
        controller.write(Path::new("out/wall.ppm")).unwrap();

        let written = controller.presenter.written.borrow();
        assert_eq!(written.as_slice(), &[(PathBuf::from("out/wall.ppm"), 240, 120)]);
    }

    #[test]
    fn test_write_before_generate_fails() {
        let controller =
            CliRenderController::new(StubPresenterRecorder::default(), StubConstant(0.5));

        assert!(matches!(
            controller.write(Path::new("wall.ppm")),
            Err(CliRenderError::NothingRendered)
        ));
    }

    #[test]
    fn test_defaults_render_monochrome_wall() {
        let mut controller =
            CliRenderController::new(StubPresenterRecorder::default(), StubConstant(0.5));

        controller.generate(&small_options()).unwrap();

        let frame = controller.controller.frame().unwrap();
        assert_eq!(frame.pixel(0, 0), Some(Colour::gray(25)));
        assert_eq!(controller.settings().mode(), ColourMode::Monochrome);
    }

    #[test]
    fn test_burst_mode_option_draws_palette() {
        let mut controller =
            CliRenderController::new(StubPresenterRecorder::default(), StubConstant(0.0));
        let options = RenderOptions {
            mode: ColourMode::ComplementaryBurst,
            ..small_options()
        };

        controller.generate(&options).unwrap();

        assert_eq!(controller.settings().palette(), Some(&Palette::new(0.0, 72.0)));
    }

    #[test]
    fn test_randomize_option_changes_parameters() {
        let mut controller =
            CliRenderController::new(StubPresenterRecorder::default(), StubConstant(0.25));
        let options = RenderOptions {
            randomize: true,
            ..small_options()
        };

        controller.generate(&options).unwrap();

        assert_eq!(controller.settings().parameters().tile_height(), 31.0);
        assert_eq!(controller.settings().mode(), ColourMode::Monochrome);
    }

    #[test]
    fn test_empty_viewport_is_an_error() {
        let mut controller =
            CliRenderController::new(StubPresenterRecorder::default(), StubConstant(0.5));
        let options = RenderOptions {
            viewport: Viewport::new(0.0, 10.0, 1.0),
            ..RenderOptions::default()
        };

        assert!(matches!(
            controller.generate(&options),
            Err(CliRenderError::Render(RenderError::Surface(
                PixelBufferError::EmptySurface { .. }
            )))
        ));
    }

    #[test]
    fn test_presenter_failure_is_reported() {
        let mut controller = CliRenderController::new(StubPresenterFailure, StubConstant(0.5));

        controller.generate(&small_options()).unwrap();

        assert!(matches!(
            controller.write(Path::new("wall.ppm")),
            Err(CliRenderError::Io(_))
        ));
    }
}
