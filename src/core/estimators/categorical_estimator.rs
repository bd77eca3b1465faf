use crate::classifiers::error::{ClassifierError, Result};
use crate::utils::math::ln_or_neg_infinity;

/// Probability mass over the codes of a nominal attribute.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CategoricalEstimator {
    mass: Vec<f64>,
    counts: Vec<usize>,
    smoothed: bool,
}

impl CategoricalEstimator {
    /// Unfitted mass of all zeros over `cardinality` codes.
    pub fn new(cardinality: usize) -> Self {
        Self {
            mass: vec![0.0; cardinality],
            counts: vec![0; cardinality],
            smoothed: false,
        }
    }

    /// Builds the mass from per-code counts. Returns `None` when every count is
    /// zero.
    ///
    /// Relative frequencies are used as-is unless at least one code was never
    /// observed; in that case every code gets Laplace add-one smoothing,
    /// `(count + 1) / (total + cardinality)`.
    pub fn fit(counts: &[usize]) -> Option<Self> {
        let total: usize = counts.iter().sum();
        if total == 0 {
            return None;
        }
        let smoothed = counts.contains(&0);
        let mass = if smoothed {
            let denom = (total + counts.len()) as f64;
            counts.iter().map(|&c| (c + 1) as f64 / denom).collect()
        } else {
            let denom = total as f64;
            counts.iter().map(|&c| c as f64 / denom).collect()
        };
        Some(Self {
            mass,
            counts: counts.to_vec(),
            smoothed,
        })
    }

    pub fn mass(&self) -> &[f64] {
        &self.mass
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn cardinality(&self) -> usize {
        self.mass.len()
    }

    /// Whether add-one smoothing was triggered by a zero count.
    pub fn is_smoothed(&self) -> bool {
        self.smoothed
    }

    pub fn probability(&self, code: usize) -> Result<f64> {
        self.mass
            .get(code)
            .copied()
            .ok_or(ClassifierError::InvalidCategory {
                code,
                cardinality: self.mass.len(),
            })
    }

    pub fn log_probability(&self, code: usize) -> Result<f64> {
        self.probability(code).map(ln_or_neg_infinity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn zero_count_triggers_smoothing_for_every_code() {
        let c = CategoricalEstimator::fit(&[3, 0, 1]).unwrap();
        assert!(c.is_smoothed());
        let expected = [4.0 / 7.0, 1.0 / 7.0, 2.0 / 7.0];
        for (got, want) in c.mass().iter().zip(expected) {
            assert!(approx_eq(*got, want, EPS));
        }
        assert!(approx_eq(c.mass().iter().sum::<f64>(), 1.0, EPS));
    }

    #[test]
    fn no_zero_count_uses_raw_frequencies() {
        let c = CategoricalEstimator::fit(&[2, 3, 5]).unwrap();
        assert!(!c.is_smoothed());
        assert_eq!(c.mass(), &[0.2, 0.3, 0.5]);
        assert!(approx_eq(c.mass().iter().sum::<f64>(), 1.0, EPS));
    }

    #[test]
    fn all_zero_counts_cannot_be_fitted() {
        assert!(CategoricalEstimator::fit(&[0, 0]).is_none());
        assert!(CategoricalEstimator::fit(&[]).is_none());
    }

    #[test]
    fn out_of_range_code_is_invalid() {
        let c = CategoricalEstimator::fit(&[1, 1]).unwrap();
        assert!(approx_eq(c.probability(1).unwrap(), 0.5, EPS));
        assert_eq!(
            c.probability(2),
            Err(ClassifierError::InvalidCategory {
                code: 2,
                cardinality: 2
            })
        );
        assert!(approx_eq(c.log_probability(0).unwrap(), 0.5f64.ln(), EPS));
    }

    #[test]
    fn unfitted_mass_is_zero() {
        let c = CategoricalEstimator::new(3);
        assert_eq!(c.cardinality(), 3);
        assert_eq!(c.log_probability(0).unwrap(), f64::NEG_INFINITY);
    }
}
