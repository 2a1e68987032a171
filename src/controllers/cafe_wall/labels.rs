use crate::core::data::render_parameters::RenderParameters;

/// Text shown next to each slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlLabels {
    pub tile_width: String,
    pub tile_height: String,
    pub row_offset: String,
    pub mortar_thickness: String,
    pub mortar_gray: String,
    pub contrast: String,
}

fn pixels(value: f64) -> String {
    format!("{value}px")
}

impl ControlLabels {
    #[must_use]
    pub fn from_parameters(params: &RenderParameters) -> Self {
        Self {
            tile_width: pixels(params.tile_width()),
            tile_height: pixels(params.tile_height()),
            row_offset: pixels(params.row_offset()),
            mortar_thickness: pixels(params.mortar_thickness()),
            mortar_gray: params.mortar_gray().to_string(),
            contrast: format!("{:.2}", params.contrast()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = ControlLabels::from_parameters(&RenderParameters::default());

        assert_eq!(labels.tile_width, "72px");
        assert_eq!(labels.tile_height, "34px");
        assert_eq!(labels.row_offset, "36px");
        assert_eq!(labels.mortar_thickness, "3px");
        assert_eq!(labels.mortar_gray, "205");
        assert_eq!(labels.contrast, "0.92");
    }

    #[test]
    fn test_contrast_always_has_two_decimals() {
        let mut params = RenderParameters::default();
        params.set_contrast(1.0);

        assert_eq!(ControlLabels::from_parameters(&params).contrast, "1.00");
    }
}
