use crate::classifiers::error::{ClassifierError, Result};
use crate::utils::math::{normal_density, normal_log_density};

/// Normal distribution fitted by sample mean and unbiased sample variance.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GaussianEstimator {
    mean: f64,
    variance: f64,
    count: usize,
}

impl GaussianEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(mean: f64, variance: f64) -> Self {
        Self {
            mean,
            variance,
            count: 0,
        }
    }

    /// Two-pass fit: mean first, then squared deviations over `n - 1`.
    ///
    /// A single observation yields variance 0. `var_smoothing` is added to
    /// the fitted variance.
    pub fn fit(values: &[f64], var_smoothing: f64) -> Self {
        let count = values.len();
        if count == 0 {
            return Self::default();
        }
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let sum_sq_diff: f64 = values
            .iter()
            .map(|&x| {
                let diff = x - mean;
                diff * diff
            })
            .sum();
        let variance = if count > 1 {
            sum_sq_diff / (n - 1.0)
        } else {
            0.0
        };
        Self {
            mean,
            variance: variance + var_smoothing,
            count,
        }
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[inline]
    pub fn variance(&self) -> f64 {
        self.variance
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn probability_density(&self, x: f64) -> Result<f64> {
        self.check_variance()?;
        Ok(normal_density(x, self.mean, self.variance))
    }

    pub fn log_probability_density(&self, x: f64) -> Result<f64> {
        self.check_variance()?;
        Ok(normal_log_density(x, self.mean, self.variance))
    }

    #[inline]
    fn check_variance(&self) -> Result<()> {
        // NaN fails this too.
        if self.variance > 0.0 {
            Ok(())
        } else {
            Err(ClassifierError::DegenerateDistribution {
                variance: self.variance,
            })
        }
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
    fn unbiased_variance() {
        let g = GaussianEstimator::fit(&[1.0, 3.0], 0.0);
        assert!(approx_eq(g.mean(), 2.0, EPS));
        assert!(approx_eq(g.variance(), 2.0, EPS));
        assert_eq!(g.count(), 2);

        let g = GaussianEstimator::fit(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 0.0);
        assert!(approx_eq(g.mean(), 5.0, EPS));
        assert!(approx_eq(g.variance(), 32.0 / 7.0, EPS));
    }

    #[test]
    fn density_peaks_at_mean() {
        let g = GaussianEstimator::fit(&[1.0, 2.0, 3.0], 0.0);
        let center = g.probability_density(2.0).unwrap();
        assert!(center > g.probability_density(0.0).unwrap());
        assert!(center > g.probability_density(4.0).unwrap());
        assert!(approx_eq(
            g.log_probability_density(0.5).unwrap(),
            g.probability_density(0.5).unwrap().ln(),
            1e-9
        ));
    }

    #[test]
    fn single_observation_is_degenerate() {
        let g = GaussianEstimator::fit(&[10.0], 0.0);
        assert_eq!(g.variance(), 0.0);
        assert_eq!(
            g.probability_density(10.0),
            Err(ClassifierError::DegenerateDistribution { variance: 0.0 })
        );
    }

    #[test]
    fn constant_values_are_degenerate_unless_smoothed() {
        let g = GaussianEstimator::fit(&[3.0, 3.0, 3.0], 0.0);
        assert!(g.log_probability_density(3.0).is_err());

        let g = GaussianEstimator::fit(&[3.0, 3.0, 3.0], 1e-3);
        assert!(approx_eq(g.variance(), 1e-3, EPS));
        assert!(g.log_probability_density(3.0).unwrap().is_finite());
    }

    #[test]
    fn negative_variance_is_rejected() {
        let g = GaussianEstimator::with_parameters(0.0, -1.0);
        assert!(matches!(
            g.probability_density(0.0),
            Err(ClassifierError::DegenerateDistribution { .. })
        ));
    }
}
