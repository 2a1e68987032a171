/// Rounds to the nearest integer, with halves going towards positive infinity.
///
/// `f64::round` rounds halves away from zero, which would shift negative
/// tile positions such as `-108.5` one pixel further left than the layout
/// expects.
#[inline]
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to `decimals` fractional digits using [`round_half_up`].
#[must_use]
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    round_half_up(value * factor) / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_positive() {
        assert_eq!(round_half_up(24.8), 25.0);
        assert_eq!(round_half_up(24.5), 25.0);
        assert_eq!(round_half_up(24.49), 24.0);
    }

    #[test]
    fn test_round_half_up_negative_halves_go_up() {
        assert_eq!(round_half_up(-108.5), -108.0);
        assert_eq!(round_half_up(-108.51), -109.0);
        assert_eq!(round_half_up(-0.4), 0.0);
    }

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to_decimals(0.8649, 2), 0.86);
        assert_eq!(round_to_decimals(0.98, 2), 0.98);
    }
}
