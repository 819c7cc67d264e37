//! Weighted categorical sampling.

use rand::Rng;
use thiserror::Error;

/// A violated precondition of [`weighted_choice`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    /// No categories to choose from.
    #[error("cannot sample from an empty category list")]
    Empty,
    /// Category and weight lists differ in length.
    #[error("{categories} categories but {weights} weights")]
    LengthMismatch {
        /// Number of categories.
        categories: usize,
        /// Number of weights.
        weights: usize,
    },
    /// A weight is negative or not finite.
    #[error("invalid weight {0}")]
    InvalidWeight(f64),
    /// Every weight is zero.
    #[error("weights sum to zero")]
    ZeroTotal,
}

/// Draws one category with probability proportional to its weight.
///
/// Weights need not sum to one. The draw walks the cumulative normalized
/// weights in list order and returns the first positive-weight category whose
/// cumulative weight meets or exceeds a uniform draw in `[0, 1)`. If rounding
/// leaves the final cumulative weight below the draw, the last category is
/// returned.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use route_synth::sampling::weighted_choice;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let labels = ["light", "moderate", "heavy"];
/// let pick = weighted_choice(&mut rng, &labels, &[0.0, 1.0, 0.0]).unwrap();
/// assert_eq!(*pick, "moderate");
/// ```
pub fn weighted_choice<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    categories: &'a [T],
    weights: &[f64],
) -> Result<&'a T, SamplingError> {
    if categories.is_empty() {
        return Err(SamplingError::Empty);
    }
    if categories.len() != weights.len() {
        return Err(SamplingError::LengthMismatch {
            categories: categories.len(),
            weights: weights.len(),
        });
    }
    if let Some(&bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(SamplingError::InvalidWeight(bad));
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(SamplingError::ZeroTotal);
    }

    let draw: f64 = rng.random();
    Ok(select(categories, weights, total, draw))
}

fn select<'a, T>(categories: &'a [T], weights: &[f64], total: f64, draw: f64) -> &'a T {
    let mut cumulative = 0.0;
    for (category, &weight) in categories.iter().zip(weights) {
        cumulative += weight / total;
        if weight > 0.0 && cumulative >= draw {
            return category;
        }
    }
    &categories[categories.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const LABELS: [usize; 3] = [0, 1, 2];

    #[test]
    fn test_point_mass_first() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert_eq!(*weighted_choice(&mut rng, &LABELS, &[1.0, 0.0, 0.0]).unwrap(), 0);
        }
    }

    #[test]
    fn test_point_mass_middle() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert_eq!(*weighted_choice(&mut rng, &LABELS, &[0.0, 1.0, 0.0]).unwrap(), 1);
        }
    }

    #[test]
    fn test_unnormalized_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0usize; 3];
        for _ in 0..10_000 {
            counts[*weighted_choice(&mut rng, &LABELS, &[6.0, 3.0, 1.0]).unwrap()] += 1;
        }
        // 60% / 30% / 10% with generous tolerance
        assert!((5500..6500).contains(&counts[0]), "{counts:?}");
        assert!((2500..3500).contains(&counts[1]), "{counts:?}");
        assert!((700..1300).contains(&counts[2]), "{counts:?}");
    }

    #[test]
    fn test_select_walks_cumulative() {
        let w = [0.5, 0.25, 0.25];
        assert_eq!(*select(&LABELS, &w, 1.0, 0.0), 0);
        assert_eq!(*select(&LABELS, &w, 1.0, 0.5), 0);
        assert_eq!(*select(&LABELS, &w, 1.0, 0.6), 1);
        assert_eq!(*select(&LABELS, &w, 1.0, 0.99), 2);
    }

    #[test]
    fn test_select_falls_back_to_last() {
        // A draw the cumulative sum never reaches
        assert_eq!(*select(&LABELS, &[1.0, 1.0, 0.0], 2.0, 1.5), 2);
    }

    #[test]
    fn test_zero_weight_never_selected_at_zero_draw() {
        assert_eq!(*select(&LABELS, &[0.0, 1.0, 0.0], 1.0, 0.0), 1);
    }

    #[test]
    fn test_precondition_errors() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [u8; 0] = [];
        assert_eq!(weighted_choice(&mut rng, &empty, &[]), Err(SamplingError::Empty));
        assert_eq!(
            weighted_choice(&mut rng, &LABELS, &[1.0]),
            Err(SamplingError::LengthMismatch {
                categories: 3,
                weights: 1
            })
        );
        assert_eq!(
            weighted_choice(&mut rng, &LABELS, &[1.0, -1.0, 0.0]),
            Err(SamplingError::InvalidWeight(-1.0))
        );
        assert_eq!(
            weighted_choice(&mut rng, &LABELS, &[0.0, 0.0, 0.0]),
            Err(SamplingError::ZeroTotal)
        );
        assert!(matches!(
            weighted_choice(&mut rng, &LABELS, &[f64::NAN, 1.0, 0.0]),
            Err(SamplingError::InvalidWeight(_))
        ));
    }
}
