mod confusion_matrix;
mod evaluators;
mod measurement;
mod partition;

pub use confusion_matrix::{ConfusionMatrix, Evaluation};
pub use evaluators::{
    ConfusionMatrixEvaluator, HoldoutEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt,
};
pub use measurement::Measurement;
pub use partition::Partition;
