use crate::classifiers::error::{ClassifierError, ConfigurationError, Result};
use crate::core::attributes::{Attribute, AttributeKind};
use crate::core::estimators::{CategoricalEstimator, GaussianEstimator};
use crate::core::instances::Value;

/// Conditional distribution of one attribute, variant chosen by attribute type.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    Gaussian(GaussianEstimator),
    Categorical(CategoricalEstimator),
}

impl Distribution {
    /// Unfitted distribution matching the type of `attribute`.
    pub fn for_attribute(index: usize, attribute: &Attribute) -> Result<Self> {
        match attribute {
            Attribute::Numeric(_) => Ok(Distribution::Gaussian(GaussianEstimator::new())),
            Attribute::Nominal(a) => Ok(Distribution::Categorical(CategoricalEstimator::new(
                a.cardinality(),
            ))),
            Attribute::String(a) => Err(ConfigurationError::UnsupportedAttributeType {
                index,
                name: a.name.clone(),
                kind: AttributeKind::String,
            }
            .into()),
        }
    }

    pub fn kind(&self) -> AttributeKind {
        match self {
            Distribution::Gaussian(_) => AttributeKind::Numeric,
            Distribution::Categorical(_) => AttributeKind::Nominal,
        }
    }

    /// Density for numeric values, mass for nominal codes.
    pub fn probability(&self, value: &Value) -> Result<f64> {
        match (self, value) {
            (Distribution::Gaussian(g), Value::Numeric(x)) => g.probability_density(*x),
            (Distribution::Categorical(c), Value::Nominal(code)) => c.probability(*code),
            _ => Err(self.mismatch(value)),
        }
    }

    pub fn log_probability(&self, value: &Value) -> Result<f64> {
        match (self, value) {
            (Distribution::Gaussian(g), Value::Numeric(x)) => g.log_probability_density(*x),
            (Distribution::Categorical(c), Value::Nominal(code)) => c.log_probability(*code),
            _ => Err(self.mismatch(value)),
        }
    }

    pub fn as_gaussian(&self) -> Option<&GaussianEstimator> {
        match self {
            Distribution::Gaussian(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&CategoricalEstimator> {
        match self {
            Distribution::Categorical(c) => Some(c),
            _ => None,
        }
    }

    fn mismatch(&self, value: &Value) -> ClassifierError {
        ClassifierError::ValueTypeMismatch {
            expected: self.kind(),
            found: value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attributes::{NominalAttribute, NumericAttribute, StringAttribute};

    #[test]
    fn variant_follows_attribute_type() {
        let numeric: Attribute = NumericAttribute::new("x".into()).into();
        let nominal: Attribute = NominalAttribute::from_labels("c", ["a", "b", "c"]).into();

        let d = Distribution::for_attribute(0, &numeric).unwrap();
        assert_eq!(d.kind(), AttributeKind::Numeric);
        let d = Distribution::for_attribute(1, &nominal).unwrap();
        assert_eq!(d.as_categorical().map(|c| c.cardinality()), Some(3));
    }

    #[test]
    fn string_attributes_are_unsupported() {
        let text: Attribute = StringAttribute::new("note".into()).into();
        let err = Distribution::for_attribute(4, &text).unwrap_err();
        assert_eq!(
            err,
            ClassifierError::Configuration(ConfigurationError::UnsupportedAttributeType {
                index: 4,
                name: "note".into(),
                kind: AttributeKind::String,
            })
        );
    }

    #[test]
    fn dispatches_on_value_type() {
        let g = Distribution::Gaussian(GaussianEstimator::fit(&[1.0, 3.0], 0.0));
        assert!(g.probability(&Value::Numeric(2.0)).unwrap() > 0.0);
        assert!(matches!(
            g.probability(&Value::Nominal(0)),
            Err(ClassifierError::ValueTypeMismatch {
                expected: AttributeKind::Numeric,
                ..
            })
        ));

        let c = Distribution::Categorical(CategoricalEstimator::fit(&[2, 3, 5]).unwrap());
        assert_eq!(c.probability(&Value::Nominal(2)).unwrap(), 0.5);
        assert!(c.log_probability(&Value::Missing).is_err());
    }
}
