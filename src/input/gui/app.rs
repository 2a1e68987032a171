use egui::Context;
use egui_winit::State as EguiWinitState;
use log::warn;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::cafe_wall::{CafeWallController, ControlAction};
use crate::core::actions::generate_palette::ports::random_source::RandomSource;
use crate::core::data::viewport::Viewport;
use crate::input::gui::control_panel::show_control_panel;
use crate::input::gui::ports::presenter::GuiPresenterPort;

pub struct GuiApp<P: GuiPresenterPort, R: RandomSource> {
    presenter: P,
    controller: CafeWallController<R>,
    last_error_message: Option<String>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort, R: RandomSource> GuiApp<P, R> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: P,
        controller: CafeWallController<R>,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            controller,
            last_error_message: None,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    /// Rebuilds the viewport from the window's physical size and scale
    /// factor, then redraws the wall at the new size.
    pub fn resize(&mut self, width: u32, height: u32, scale_factor: f64) {
        if let Err(error) = self.presenter.resize(width, height) {
            self.report(format!("failed to resize framebuffer: {error}"));
            return;
        }

        let result = self.controller.resize(Viewport::from_physical(width, height, scale_factor));
        self.after_update(result.map_err(|error| error.to_string()));
    }

    /// Runs one egui frame and applies whatever the control panel produced.
    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let labels = self.controller.labels();
        let mut actions = Vec::new();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            actions = show_control_panel(
                ctx,
                self.controller.settings(),
                &labels,
                self.last_error_message.as_deref(),
            );
        });

        for action in actions {
            self.apply(action);
        }

        output
    }

    /// Returns `(consumed, repaint)` from egui.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    fn apply(&mut self, action: ControlAction) {
        let result = self.controller.handle(action);
        self.after_update(result.map_err(|error| error.to_string()));
    }

    fn after_update(&mut self, result: Result<(), String>) {
        if let Err(message) = result {
            self.report(message);
            return;
        }

        let Some(frame) = self.controller.frame() else {
            return;
        };

        match self.presenter.present(frame) {
            Ok(()) => self.last_error_message = None,
            // A resize is in flight; the next frame will match
            Err(error) => warn!("skipping frame: {error}"),
        }
    }

    fn report(&mut self, message: String) {
        warn!("{message}");
        self.last_error_message = Some(message);
    }
}
