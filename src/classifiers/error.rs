use crate::core::attributes::AttributeKind;
use crate::core::instances::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClassifierError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifierError {
    #[error(transparent)]
    Precondition(#[from] PreconditionViolation),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("degenerate distribution: variance {variance} is not positive")]
    DegenerateDistribution { variance: f64 },

    #[error("category code {code} is out of range for {cardinality} possible values")]
    InvalidCategory { code: usize, cardinality: usize },

    #[error("expected a {expected} value, got {found}")]
    ValueTypeMismatch {
        expected: AttributeKind,
        found: Value,
    },

    #[error("attribute {attribute} holds non-finite value {value}")]
    NonFiniteValue { attribute: usize, value: f64 },

    #[error("score of class {class} is undefined (NaN)")]
    UndefinedScore { class: usize },
}

/// Caller misuse detected before any computation starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PreconditionViolation {
    #[error("training partition is empty")]
    EmptyTrainSet,

    #[error("test partition is empty")]
    EmptyTestSet,

    #[error("class index {index} is out of range for {attributes} attributes")]
    ClassIndexOutOfRange { index: usize, attributes: usize },

    #[error("class attribute {name} ({index}) is {kind}, expected nominal")]
    ClassAttributeNotNominal {
        index: usize,
        name: String,
        kind: AttributeKind,
    },

    #[error("class attribute declares no classes")]
    NoClasses,

    #[error("instance index {index} is out of range for {count} instances")]
    InstanceIndexOutOfRange { index: usize, count: usize },

    #[error("instance index {index} appears more than once in the {set} partition")]
    DuplicateInstanceIndex { index: usize, set: &'static str },

    #[error("attribute index {index} is out of range for {attributes} attributes")]
    AttributeIndexOutOfRange { index: usize, attributes: usize },

    #[error("attribute {index} is the class attribute and cannot be a predictor")]
    ClassAttributeSelected { index: usize },

    #[error("no predictive attributes are selected")]
    NoPredictiveAttributes,

    #[error("test instance {index} has a missing class label")]
    MissingClassLabel { index: usize },

    #[error("instance has {got} attributes, the model expects {expected}")]
    InstanceArityMismatch { expected: usize, got: usize },
}

/// The table cannot be modeled; any partially fitted state is discarded.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("unsupported attribute type for {name} ({index}): {kind}")]
    UnsupportedAttributeType {
        index: usize,
        name: String,
        kind: AttributeKind,
    },

    #[error(
        "no observations of attribute {attribute_name} ({attribute}) for class {class_name} ({class})"
    )]
    NoObservations {
        class: usize,
        class_name: String,
        attribute: usize,
        attribute_name: String,
    },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("fitted model failed validation: {0}")]
    ValidationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_errors_keep_their_message() {
        let err: ClassifierError = PreconditionViolation::MissingClassLabel { index: 4 }.into();
        assert_eq!(err.to_string(), "test instance 4 has a missing class label");

        let err: ClassifierError = ConfigurationError::NoObservations {
            class: 1,
            class_name: "yes".into(),
            attribute: 2,
            attribute_name: "humidity".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "no observations of attribute humidity (2) for class yes (1)"
        );
    }

    #[test]
    fn kinds_render_in_kebab_case() {
        let err = ClassifierError::ValueTypeMismatch {
            expected: AttributeKind::Numeric,
            found: Value::Nominal(3),
        };
        assert_eq!(err.to_string(), "expected a numeric value, got #3");
    }

    #[test]
    fn non_finite_errors_name_the_offender() {
        let err = ClassifierError::NonFiniteValue {
            attribute: 0,
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "attribute 0 holds non-finite value inf");
        let err = ClassifierError::UndefinedScore { class: 2 };
        assert_eq!(err.to_string(), "score of class 2 is undefined (NaN)");
    }
}
