use std::marker::PhantomData;

use log::{error, info};
use thiserror::Error;
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::controllers::cafe_wall::CafeWallController;
use crate::core::actions::generate_palette::ports::random_source::RandomSource;
use crate::input::gui::app::GuiApp;
use crate::input::gui::ports::presenter::GuiPresenterPort;
use crate::input::gui::ports::presenter_factory::GuiPresenterFactoryPort;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error("failed to create framebuffer: {0}")]
    Pixels(#[from] pixels::Error),
}

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute<R: RandomSource>(&self, random: R) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Café Wall")
                .with_inner_size(LogicalSize::new(1200.0, 800.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter = self.presenter_factory.build(window)?;
        let controller = CafeWallController::new(random);
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);

        let size = window.inner_size();
        app.resize(size.width, size.height, window.scale_factor());
        info!("window open at {}x{}", size.width, size.height);

        let mut redraw_pending = true;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (_, egui_repaint) = app.handle_window_event(window, event);

                if egui_repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = app.update_ui(window);

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(e) = app.render(egui_output) {
                            error!("render error: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        app.resize(size.width, size.height, window.scale_factor());
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        app.resize(size.width, size.height, *scale_factor);
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
