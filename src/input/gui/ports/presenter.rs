use egui::Context as EguiContext;

use crate::adapters::pixel_format::FrameSizeMismatch;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Window-side output: a framebuffer with the control panel drawn on top.
pub trait GuiPresenterPort {
    /// Copies a rendered frame into the framebuffer.
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), FrameSizeMismatch>;
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
