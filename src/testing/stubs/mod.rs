pub mod echo_classifier;
pub mod fixed_classifier;

pub use echo_classifier::EchoClassifier;
pub use fixed_classifier::FixedClassifier;
