use std::f64::consts::PI;

pub const TWO_PI: f64 = 2.0 * PI;

/// Density of `N(mean, variance)` at `x`. Requires `variance > 0`.
#[inline]
pub fn normal_density(x: f64, mean: f64, variance: f64) -> f64 {
    let diff = x - mean;
    (1.0 / (TWO_PI * variance).sqrt()) * (-(diff * diff) / (2.0 * variance)).exp()
}

/// `ln` of [`normal_density`], computed without going through the density
/// so that far tails do not underflow to `-inf`.
#[inline]
pub fn normal_log_density(x: f64, mean: f64, variance: f64) -> f64 {
    let diff = x - mean;
    -0.5 * (TWO_PI * variance).ln() - (diff * diff) / (2.0 * variance)
}

/// `ln(p)`, with `ln(0) = -inf`.
#[inline]
pub fn ln_or_neg_infinity(p: f64) -> f64 {
    if p > 0.0 { p.ln() } else { f64::NEG_INFINITY }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-12;

    #[test]
    fn standard_normal_peak() {
        let p = normal_density(0.0, 0.0, 1.0);
        assert!((p - 1.0 / TWO_PI.sqrt()).abs() < EPS);
    }

    #[test]
    fn log_density_matches_density() {
        for &(x, m, v) in &[(2.0, 2.0, 2.0), (5.0, 6.0, 0.5), (-3.0, 1.0, 4.0)] {
            let direct = normal_density(x, m, v).ln();
            assert!((normal_log_density(x, m, v) - direct).abs() < 1e-9);
        }
    }

    #[test]
    fn log_density_survives_far_tail() {
        assert_eq!(normal_density(1e6, 0.0, 1.0), 0.0);
        assert!(normal_log_density(1e6, 0.0, 1.0).is_finite());
    }

    #[test]
    fn ln_of_zero_is_negative_infinity() {
        assert_eq!(ln_or_neg_infinity(0.0), f64::NEG_INFINITY);
        assert_eq!(ln_or_neg_infinity(1.0), 0.0);
    }
}
