use crate::classifiers::error::{PreconditionViolation, Result};
use std::collections::HashSet;

/// Train and test index lists into a labeled table.
///
/// Indices are validated against the instance count on construction but the
/// table itself is not referenced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    train: Vec<usize>,
    test: Vec<usize>,
}

impl Partition {
    /// No training and no test instances.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Train and test both cover `0..number_of_instances`.
    pub fn full(number_of_instances: usize) -> Self {
        let train: Vec<usize> = (0..number_of_instances).collect();
        Self {
            test: train.clone(),
            train,
        }
    }

    pub fn new(train: Vec<usize>, test: Vec<usize>, number_of_instances: usize) -> Result<Self> {
        if let Some(&index) = train
            .iter()
            .chain(test.iter())
            .find(|&&i| i >= number_of_instances)
        {
            return Err(PreconditionViolation::InstanceIndexOutOfRange {
                index,
                count: number_of_instances,
            }
            .into());
        }
        Ok(Self { train, test })
    }

    pub fn train(&self) -> &[usize] {
        &self.train
    }

    pub fn test(&self) -> &[usize] {
        &self.test
    }

    /// Fails on the first index that appears twice within one side.
    pub fn check_unique(&self) -> Result<()> {
        for (set, indices) in [("train", &self.train), ("test", &self.test)] {
            let mut seen = HashSet::with_capacity(indices.len());
            if let Some(&index) = indices.iter().find(|&&i| !seen.insert(i)) {
                return Err(PreconditionViolation::DuplicateInstanceIndex { index, set }.into());
            }
        }
        Ok(())
    }

    pub(crate) fn require_non_empty(&self) -> Result<()> {
        if self.train.is_empty() {
            return Err(PreconditionViolation::EmptyTrainSet.into());
        }
        if self.test.is_empty() {
            return Err(PreconditionViolation::EmptyTestSet.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::error::ClassifierError;

    #[test]
    fn full_partition_uses_every_index_on_both_sides() {
        let p = Partition::full(4);
        assert_eq!(p.train(), &[0, 1, 2, 3]);
        assert_eq!(p.test(), p.train());
        assert!(p.require_non_empty().is_ok());
    }

    #[test]
    fn empty_partition_fails_non_empty_check() {
        assert_eq!(
            Partition::empty().require_non_empty(),
            Err(ClassifierError::Precondition(
                PreconditionViolation::EmptyTrainSet
            ))
        );
        let p = Partition::new(vec![0], vec![], 1).unwrap();
        assert_eq!(
            p.require_non_empty(),
            Err(ClassifierError::Precondition(
                PreconditionViolation::EmptyTestSet
            ))
        );
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let err = Partition::new(vec![0, 1], vec![5], 3).unwrap_err();
        assert_eq!(
            err,
            ClassifierError::Precondition(PreconditionViolation::InstanceIndexOutOfRange {
                index: 5,
                count: 3
            })
        );
    }

    #[test]
    fn detects_duplicates() {
        let p = Partition::new(vec![0, 1], vec![2, 1, 2], 3).unwrap();
        assert_eq!(
            p.check_unique(),
            Err(ClassifierError::Precondition(
                PreconditionViolation::DuplicateInstanceIndex {
                    index: 2,
                    set: "test"
                }
            ))
        );
        assert!(Partition::full(3).check_unique().is_ok());
    }
}
