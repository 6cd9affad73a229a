use gyip_application::ports::RandomSource;
use std::sync::Mutex;

/// Draws from fastrand's thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn below(&self, upper: usize) -> usize {
        fastrand::usize(..upper)
    }
}

/// Deterministic generator for reproducible runs.
pub struct SeededRandomSource {
    rng: Mutex<fastrand::Rng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn below(&self, upper: usize) -> usize {
        match self.rng.lock() {
            Ok(mut rng) => rng.usize(..upper),
            Err(poisoned) => poisoned.into_inner().usize(..upper),
        }
    }
}
