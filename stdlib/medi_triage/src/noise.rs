//! Injectable randomness for the score perturbation and the confidence value.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const MAX_PERTURBATION: f64 = 0.05;
pub const MIN_CONFIDENCE: f64 = 0.75;
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Source of the two random draws made per assessment.
///
/// The scorer clamps whatever comes back into `[-MAX_PERTURBATION,
/// MAX_PERTURBATION]` and `[MIN_CONFIDENCE, MAX_CONFIDENCE]`.
pub trait NoiseSource {
    fn perturbation(&mut self) -> f64;
    fn confidence(&mut self) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn perturbation(&mut self) -> f64 {
        (**self).perturbation()
    }

    fn confidence(&mut self) -> f64 {
        (**self).confidence()
    }
}

/// Uniform draws from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngNoise<R> {
    rng: R,
}

impl<R: Rng> RngNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngNoise<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NoiseSource for RngNoise<R> {
    fn perturbation(&mut self) -> f64 {
        self.rng.gen_range(-MAX_PERTURBATION..=MAX_PERTURBATION)
    }

    fn confidence(&mut self) -> f64 {
        self.rng.gen_range(MIN_CONFIDENCE..=MAX_CONFIDENCE)
    }
}

/// Constant draws, for reproducible tests and demos.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedNoise {
    pub perturbation: f64,
    pub confidence: f64,
}

impl FixedNoise {
    pub fn new(perturbation: f64, confidence: f64) -> Self {
        Self {
            perturbation,
            confidence,
        }
    }

    /// No perturbation, mid-range confidence.
    pub fn zero() -> Self {
        Self::new(0.0, 0.85)
    }
}

impl NoiseSource for FixedNoise {
    fn perturbation(&mut self) -> f64 {
        self.perturbation
    }

    fn confidence(&mut self) -> f64 {
        self.confidence
    }
}

pub(crate) fn clamp_perturbation(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(-MAX_PERTURBATION, MAX_PERTURBATION)
}

/// Clamp into the confidence range and round to two decimals.
pub fn round_confidence(value: f64) -> f64 {
    let value = if value.is_nan() { MIN_CONFIDENCE } else { value };
    (value.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) * 100.0).round() / 100.0
}
