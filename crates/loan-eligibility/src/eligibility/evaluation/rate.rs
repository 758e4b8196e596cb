use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the random component of the points-policy interest rate.
pub trait RateOffsetSource: Send + Sync {
    /// A value in `[0, 1)`.
    fn unit(&self) -> f64;
}

/// Thread-local RNG, the production default.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngOffset;

impl RateOffsetSource for ThreadRngOffset {
    fn unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible sequence for replaying a batch of evaluations.
#[derive(Debug)]
pub struct SeededRateOffset {
    rng: Mutex<StdRng>,
}

impl SeededRateOffset {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RateOffsetSource for SeededRateOffset {
    fn unit(&self) -> f64 {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen::<f64>(),
            Err(poisoned) => poisoned.into_inner().gen::<f64>(),
        }
    }
}

/// Constant offset, used to pin rates in tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedRateOffset(pub f64);

impl RateOffsetSource for FixedRateOffset {
    fn unit(&self) -> f64 {
        self.0
    }
}

pub(crate) fn clamp_unit(value: f64) -> f64 {
    if !value.is_finite() || value < 0.0 {
        0.0
    } else if value >= 1.0 {
        1.0 - f64::EPSILON
    } else {
        value
    }
}
