use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// Source of initial parameter values.
///
/// Wraps a zero-argument generator that is expected to return values in
/// `[-1, 1]`. Networks draw one value per parameter, in construction order,
/// so two networks built with equal sources and topology are identical.
pub struct Initializer {
    source: Box<dyn FnMut() -> f64>,
    description: String,
}

impl Initializer {
    /// Uniform over `[-1, 1]` from a seeded `StdRng`; reproducible.
    pub fn seeded(seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        let mut init = Self::uniform(rng);
        init.description = format!("Uniform[-1, 1] (seed {})", seed);
        init
    }

    /// Uniform over `[-1, 1]` from an OS-seeded `StdRng`.
    pub fn from_entropy() -> Self {
        Self::uniform(StdRng::from_entropy())
    }

    fn uniform(mut rng: StdRng) -> Self {
        let dist = Uniform::new_inclusive(-1.0_f64, 1.0_f64);
        Initializer {
            source: Box::new(move || dist.sample(&mut rng)),
            description: "Uniform[-1, 1]".to_string(),
        }
    }

    /// Uses a caller-provided generator.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut() -> f64 + 'static,
    {
        Initializer {
            source: Box::new(f),
            description: "custom".to_string(),
        }
    }

    /// Every parameter starts at `value`.
    pub fn constant(value: f64) -> Self {
        Initializer {
            source: Box::new(move || value),
            description: format!("Constant({})", value),
        }
    }

    /// Draws the next initial value.
    pub fn sample(&mut self) -> f64 {
        (self.source)()
    }
}

impl fmt::Debug for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Initializer({})", self.description)
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
