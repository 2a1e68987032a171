use serde::{Deserialize, Serialize};

/// Selects which branch of colour resolution a frame uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColourMode {
    #[default]
    Monochrome,
    ComplementaryBurst,
}

impl ColourMode {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Monochrome => "Black & white",
            Self::ComplementaryBurst => "Colour burst",
        }
    }
}

impl std::fmt::Display for ColourMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
