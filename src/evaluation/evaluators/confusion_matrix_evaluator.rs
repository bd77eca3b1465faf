use crate::classifiers::Prediction;
use crate::evaluation::{ConfusionMatrix, Evaluation, Measurement, PerformanceEvaluator};

/// Accumulates a `[predicted][true]` confusion matrix.
#[derive(Debug, Clone)]
pub struct ConfusionMatrixEvaluator {
    matrix: ConfusionMatrix,
}

impl ConfusionMatrixEvaluator {
    pub fn new(num_classes: usize) -> Self {
        Self {
            matrix: ConfusionMatrix::new(num_classes),
        }
    }

    pub fn matrix(&self) -> &ConfusionMatrix {
        &self.matrix
    }

    pub fn into_evaluation(self) -> Evaluation {
        Evaluation::from_counts(self.matrix)
    }
}

impl PerformanceEvaluator for ConfusionMatrixEvaluator {
    fn reset(&mut self) {
        self.matrix.clear();
    }

    fn add_result(&mut self, true_class: usize, prediction: &Prediction) {
        self.matrix.record(prediction.class, true_class);
    }

    fn performance(&self) -> Vec<Measurement> {
        Evaluation::from_counts(self.matrix.clone()).measurements()
    }
}
