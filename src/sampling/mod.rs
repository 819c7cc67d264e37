//! Random draws used by the generators.
//!
//! - [`weighted_choice`] — Categorical draw with relative weights
//! - [`uniform`] — Continuous draw in `[low, high)`
//! - [`chance`] — Bernoulli trial

mod weighted;

use rand::Rng;

pub use weighted::{weighted_choice, SamplingError};

/// Uniform draw in `[low, high)`; returns `low` when the range is empty.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + rng.random::<f64>() * (high - low)
}

/// `true` with probability `p`. Values outside `[0, 1]` saturate.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.random::<f64>() < p
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let x = uniform(&mut rng, 50.0, 200.0);
            assert!((50.0..200.0).contains(&x));
        }
    }

    #[test]
    fn test_uniform_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(uniform(&mut rng, 3.0, 3.0), 3.0);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!(!chance(&mut rng, 0.0));
            assert!(chance(&mut rng, 1.0));
        }
    }

    #[test]
    fn test_chance_rate() {
        let mut rng = StdRng::seed_from_u64(9);
        let hits = (0..10_000).filter(|_| chance(&mut rng, 0.3)).count();
        assert!((2700..3300).contains(&hits), "hits = {hits}");
    }
}
