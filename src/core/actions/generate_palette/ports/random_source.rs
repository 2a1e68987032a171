/// Source of uniform random numbers for the palette and parameter actions.
pub trait RandomSource {
    /// Returns a value uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}
