use crate::core::actions::resolve_colours::errors::ResolveColoursError;
use crate::core::actions::resolve_colours::resolve_colours::resolve_colours;
use crate::core::data::colour_mode::ColourMode;
use crate::core::data::palette::Palette;
use crate::core::data::render_parameters::RenderParameters;
use crate::core::data::resolved_colours::ResolvedColours;

/// The current settings behind the control panel.
///
/// Mode and palette only change together: entering burst mode stores a
/// palette, and reset drops it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WallSettings {
    parameters: RenderParameters,
    mode: ColourMode,
    palette: Option<Palette>,
}

impl WallSettings {
    #[must_use]
    pub fn new(parameters: RenderParameters) -> Self {
        Self {
            parameters,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn parameters(&self) -> &RenderParameters {
        &self.parameters
    }

    pub(crate) fn parameters_mut(&mut self) -> &mut RenderParameters {
        &mut self.parameters
    }

    #[must_use]
    pub fn mode(&self) -> ColourMode {
        self.mode
    }

    #[must_use]
    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    pub fn enter_burst(&mut self, palette: Palette) {
        self.mode = ColourMode::ComplementaryBurst;
        self.palette = Some(palette);
    }

    /// Restores the default parameters and black & white mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn colours(&self) -> Result<ResolvedColours, ResolveColoursError> {
        resolve_colours(&self.parameters, self.mode, self.palette.as_ref())
    }
}
