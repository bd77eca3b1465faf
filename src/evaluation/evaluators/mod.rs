mod confusion_matrix_evaluator;
mod holdout_evaluator;
mod performance_evaluator;

pub use confusion_matrix_evaluator::ConfusionMatrixEvaluator;
pub use holdout_evaluator::HoldoutEvaluator;
pub use performance_evaluator::{PerformanceEvaluator, PerformanceEvaluatorExt};
