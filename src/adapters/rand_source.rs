//! `rand`-backed implementation of the random source port.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::actions::generate_palette::ports::random_source::RandomSource;

pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeded sources repeat the same palettes and randomized parameters
    /// from run to run; `None` seeds from the operating system.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self::new(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}
