use crate::core::util::round::round_half_up;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const WHITE: Self = Self::gray(255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A neutral colour with all three channels set to `level`.
    #[must_use]
    pub const fn gray(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }

    /// Converts an HSL triple to RGB.
    ///
    /// `hue` is in degrees, `saturation` and `lightness` are percentages.
    /// All three are rounded to whole numbers before conversion, the same
    /// precision a CSS `hsl(h s% l%)` string carries.
    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = round_half_up(hue).rem_euclid(360.0);
        let s = round_half_up(saturation).clamp(0.0, 100.0) / 100.0;
        let l = round_half_up(lightness).clamp(0.0, 100.0) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self {
            r: channel(r + m),
            g: channel(g + m),
            b: channel(b + m),
        }
    }
}

fn channel(unit: f64) -> u8 {
    round_half_up(unit * 255.0).clamp(0.0, 255.0) as u8
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}
