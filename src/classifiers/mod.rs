pub mod bayes;
pub mod classifier;
pub mod error;

pub use bayes::{NaiveBayes, NaiveBayesModel};
pub use classifier::{Classifier, Prediction};
pub use error::{ClassifierError, ConfigurationError, PreconditionViolation, Result};
