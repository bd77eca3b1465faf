use crate::classifiers::Classifier;
use crate::classifiers::error::{ClassifierError, PreconditionViolation, Result};
use crate::core::attributes::AttributeKind;
use crate::core::dataset::LabeledTable;
use crate::core::instances::Value;
use crate::evaluation::{
    ConfusionMatrixEvaluator, Evaluation, Measurement, Partition, PerformanceEvaluator,
};

/// Scores every test instance of a partition with a fitted classifier.
pub struct HoldoutEvaluator<'a> {
    table: &'a dyn LabeledTable,
    class_index: usize,
}

impl<'a> HoldoutEvaluator<'a> {
    pub fn new(table: &'a dyn LabeledTable, class_index: usize) -> Self {
        Self { table, class_index }
    }

    /// Builds a fresh confusion matrix over `partition.test()`.
    ///
    /// A test instance without a label aborts the pass.
    pub fn evaluate(&self, classifier: &dyn Classifier, partition: &Partition) -> Result<Evaluation> {
        partition.require_non_empty()?;

        let num_classes = classifier.number_of_classes();
        let mut evaluator = ConfusionMatrixEvaluator::new(num_classes);

        for &index in partition.test() {
            let instance = self.table.instance_at_index(index).ok_or(
                PreconditionViolation::InstanceIndexOutOfRange {
                    index,
                    count: self.table.number_of_instances(),
                },
            )?;
            let truth = match instance.value_at_index(self.class_index) {
                Some(Value::Nominal(code)) if *code < num_classes => *code,
                Some(Value::Nominal(code)) => {
                    return Err(ClassifierError::InvalidCategory {
                        code: *code,
                        cardinality: num_classes,
                    });
                }
                Some(Value::Missing) | None => {
                    return Err(PreconditionViolation::MissingClassLabel { index }.into());
                }
                Some(other) => {
                    return Err(ClassifierError::ValueTypeMismatch {
                        expected: AttributeKind::Nominal,
                        found: other.clone(),
                    });
                }
            };

            let prediction = classifier.classify(instance)?;
            evaluator.add_result(truth, &prediction);
        }

        let evaluation = evaluator.into_evaluation();
        log::info!(
            "evaluated {} test instances, {}",
            partition.test().len(),
            Measurement::accuracy(evaluation.accuracy())
        );
        Ok(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::labels_only_table;
    use crate::testing::stubs::{EchoClassifier, FixedClassifier};

    #[test]
    fn oracle_gets_full_trust() {
        let table = labels_only_table(&[Some(0), Some(1), Some(1), Some(0)]);
        let ev = HoldoutEvaluator::new(&table, 0)
            .evaluate(&EchoClassifier::new(0, 2), &Partition::full(4))
            .unwrap();
        assert_eq!(ev.trust(), &[1.0, 1.0]);
        assert_eq!(ev.counts().count(0, 0), Some(2));
        assert_eq!(ev.counts().count(1, 1), Some(2));
        assert_eq!(ev.accuracy(), 1.0);
    }

    #[test]
    fn constant_prediction_leaves_other_row_zero() {
        let table = labels_only_table(&[Some(0), Some(1), Some(1), Some(1)]);
        let ev = HoldoutEvaluator::new(&table, 0)
            .evaluate(&FixedClassifier::new(1, 2), &Partition::full(4))
            .unwrap();
        assert_eq!(ev.confusion()[0], vec![0.0, 0.0]);
        assert_eq!(ev.trust()[0], 0.0);
        assert!((ev.trust()[1] - 0.75).abs() < 1e-12);
        assert!((ev.confusion()[1].iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn only_test_side_is_scored() {
        let table = labels_only_table(&[Some(0), Some(1), Some(1)]);
        let partition = Partition::new(vec![0, 1], vec![2], 3).unwrap();
        let ev = HoldoutEvaluator::new(&table, 0)
            .evaluate(&FixedClassifier::new(0, 2), &partition)
            .unwrap();
        assert_eq!(ev.counts().total(), 1);
        assert_eq!(ev.counts().count(0, 1), Some(1));
    }

    #[test]
    fn missing_test_label_is_a_precondition_violation() {
        let table = labels_only_table(&[Some(0), None, Some(1)]);
        let err = HoldoutEvaluator::new(&table, 0)
            .evaluate(&FixedClassifier::new(0, 2), &Partition::full(3))
            .unwrap_err();
        assert_eq!(
            err,
            ClassifierError::Precondition(PreconditionViolation::MissingClassLabel { index: 1 })
        );
    }

    #[test]
    fn empty_partition_is_rejected() {
        let table = labels_only_table(&[Some(0)]);
        let err = HoldoutEvaluator::new(&table, 0)
            .evaluate(&FixedClassifier::new(0, 2), &Partition::empty())
            .unwrap_err();
        assert_eq!(
            err,
            ClassifierError::Precondition(PreconditionViolation::EmptyTrainSet)
        );
    }
}
