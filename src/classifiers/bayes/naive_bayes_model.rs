use crate::classifiers::Classifier;
use crate::classifiers::bayes::{DistributionTable, FitWarning};
use crate::classifiers::error::{ClassifierError, ConfigurationError, PreconditionViolation, Result};
use crate::core::estimators::Distribution;
use crate::core::instances::Instance;
use crate::utils::math::ln_or_neg_infinity;

const MASS_TOLERANCE: f64 = 1e-9;

/// Priors and conditional distributions produced by a successful
/// [`NaiveBayes::fit`](crate::classifiers::bayes::NaiveBayes::fit).
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveBayesModel {
    num_attributes: usize,
    priors: Vec<f64>,
    class_counts: Vec<usize>,
    distributions: DistributionTable,
    warnings: Vec<FitWarning>,
}

impl NaiveBayesModel {
    pub(crate) fn new(
        num_attributes: usize,
        priors: Vec<f64>,
        class_counts: Vec<usize>,
        distributions: DistributionTable,
        warnings: Vec<FitWarning>,
    ) -> Self {
        Self {
            num_attributes,
            priors,
            class_counts,
            distributions,
            warnings,
        }
    }

    pub fn priors(&self) -> &[f64] {
        &self.priors
    }

    /// Training instances per class (labeled rows only).
    pub fn class_counts(&self) -> &[usize] {
        &self.class_counts
    }

    pub fn distributions(&self) -> &DistributionTable {
        &self.distributions
    }

    pub fn distribution(&self, class: usize, attribute: usize) -> Option<&Distribution> {
        self.distributions.get(class, attribute)
    }

    pub fn warnings(&self) -> &[FitWarning] {
        &self.warnings
    }

    pub(crate) fn check_consistency(&self) -> Result<()> {
        if let Some((class, p)) = self
            .priors
            .iter()
            .enumerate()
            .find(|(_, p)| !(0.0..=1.0).contains(*p))
        {
            return Err(ConfigurationError::ValidationFailed(format!(
                "prior of class {class} is {p}"
            ))
            .into());
        }
        let total: f64 = self.priors.iter().sum();
        if total > 1.0 + MASS_TOLERANCE {
            return Err(
                ConfigurationError::ValidationFailed(format!("priors sum to {total}")).into(),
            );
        }

        for class in (0..self.priors.len()).filter(|&c| self.class_counts[c] > 0) {
            for &attribute in self.distributions.attributes() {
                let Some(categorical) = self
                    .distribution(class, attribute)
                    .and_then(Distribution::as_categorical)
                else {
                    continue;
                };
                let sum: f64 = categorical.mass().iter().sum();
                if (sum - 1.0).abs() > MASS_TOLERANCE {
                    return Err(ConfigurationError::ValidationFailed(format!(
                        "mass of class {class} attribute {attribute} sums to {sum}"
                    ))
                    .into());
                }
            }
        }
        Ok(())
    }
}

impl Classifier for NaiveBayesModel {
    fn number_of_classes(&self) -> usize {
        self.priors.len()
    }

    /// `ln P(class) + Σ ln P(value | class)` over the non-missing predictive
    /// attributes of `instance`. A zero prior scores `-inf`.
    fn score(&self, class: usize, instance: &dyn Instance) -> Result<f64> {
        if instance.number_of_attributes() != self.num_attributes {
            return Err(PreconditionViolation::InstanceArityMismatch {
                expected: self.num_attributes,
                got: instance.number_of_attributes(),
            }
            .into());
        }
        let prior = *self
            .priors
            .get(class)
            .ok_or(ClassifierError::InvalidCategory {
                code: class,
                cardinality: self.priors.len(),
            })?;
        if prior <= 0.0 {
            return Ok(f64::NEG_INFINITY);
        }

        let mut score = ln_or_neg_infinity(prior);
        for &attribute in self.distributions.attributes() {
            let Some(value) = instance.value_at_index(attribute) else {
                continue;
            };
            if value.is_missing() {
                continue;
            }
            if let Some(x) = value.as_numeric().filter(|x| !x.is_finite()) {
                return Err(ClassifierError::NonFiniteValue {
                    attribute,
                    value: x,
                });
            }
            if let Some(distribution) = self.distribution(class, attribute) {
                score += distribution.log_probability(value)?;
            }
        }
        Ok(score)
    }
}
