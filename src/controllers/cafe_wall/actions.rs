/// A single input from the control panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    SetTileWidth(f64),
    SetTileHeight(f64),
    SetRowOffset(f64),
    SetMortarThickness(f64),
    SetMortarGray(u8),
    SetContrast(f64),
    SetInvertBrightness(bool),
    /// Switch to complementary colours with a freshly drawn palette.
    Burst,
    /// Draw new values for every numeric control.
    Randomize,
    /// Back to the default parameters in black & white.
    Reset,
}
