mod categorical_estimator;
mod distribution;
mod gaussian_estimator;

pub use categorical_estimator::CategoricalEstimator;
pub use distribution::Distribution;
pub use gaussian_estimator::GaussianEstimator;
