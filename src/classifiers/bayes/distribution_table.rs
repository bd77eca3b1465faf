use crate::classifiers::bayes::NaiveBayes;
use crate::classifiers::error::{PreconditionViolation, Result};
use crate::core::estimators::Distribution;

/// Class-major grid of conditional distributions, one cell per
/// (class, predictive attribute).
///
/// The class attribute and deselected attributes have no cell.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionTable {
    num_classes: usize,
    num_attributes: usize,
    attributes: Vec<usize>,
    cells: Vec<Option<Distribution>>,
}

impl DistributionTable {
    /// Allocates an unfitted distribution for every cell, typed after the
    /// attribute descriptors of the estimator's table.
    pub fn init(estimator: &NaiveBayes<'_>) -> Result<Self> {
        let table = estimator.table();
        let num_classes = estimator.number_of_classes();
        let num_attributes = table.number_of_attributes();
        let attributes = estimator.predictive_attributes();

        let mut row: Vec<Option<Distribution>> = vec![None; num_attributes];
        for &index in &attributes {
            let attribute = table.attribute_at_index(index).ok_or(
                PreconditionViolation::AttributeIndexOutOfRange {
                    index,
                    attributes: num_attributes,
                },
            )?;
            row[index] = Some(Distribution::for_attribute(index, attribute)?);
        }

        let mut cells = Vec::with_capacity(num_classes * num_attributes);
        for _ in 0..num_classes {
            cells.extend(row.iter().cloned());
        }

        Ok(Self {
            num_classes,
            num_attributes,
            attributes,
            cells,
        })
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    pub fn num_attributes(&self) -> usize {
        self.num_attributes
    }

    /// Indices of the attributes that own a cell, ascending.
    pub fn attributes(&self) -> &[usize] {
        &self.attributes
    }

    pub fn get(&self, class: usize, attribute: usize) -> Option<&Distribution> {
        let i = self.slot(class, attribute)?;
        self.cells[i].as_ref()
    }

    pub fn get_mut(&mut self, class: usize, attribute: usize) -> Option<&mut Distribution> {
        let i = self.slot(class, attribute)?;
        self.cells[i].as_mut()
    }

    #[inline]
    fn slot(&self, class: usize, attribute: usize) -> Option<usize> {
        (class < self.num_classes && attribute < self.num_attributes)
            .then(|| class * self.num_attributes + attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::error::{ClassifierError, ConfigurationError};
    use crate::core::attributes::AttributeKind;
    use crate::testing::dummies::{mixed_table, with_string_attribute};

    #[test]
    fn one_cell_per_class_and_predictive_attribute() {
        let table = mixed_table();
        let nb = NaiveBayes::bind(&table, 2, true).unwrap();
        let dt = DistributionTable::init(&nb).unwrap();

        assert_eq!(dt.num_classes(), 2);
        assert_eq!(dt.attributes(), &[0, 1]);
        for class in 0..2 {
            assert_eq!(dt.get(class, 0).unwrap().kind(), AttributeKind::Numeric);
            assert_eq!(dt.get(class, 1).unwrap().kind(), AttributeKind::Nominal);
            assert!(dt.get(class, 2).is_none());
        }
        assert!(dt.get(2, 0).is_none());
        assert!(dt.get(0, 3).is_none());
    }

    #[test]
    fn deselected_attributes_have_no_cell() {
        let table = mixed_table();
        let mut nb = NaiveBayes::bind(&table, 2, false).unwrap();
        nb.select_attributes([1]).unwrap();
        let dt = DistributionTable::init(&nb).unwrap();
        assert_eq!(dt.attributes(), &[1]);
        assert!(dt.get(0, 0).is_none());
        assert!(dt.get(0, 1).is_some());
    }

    #[test]
    fn unsupported_type_fails_initialization() {
        let table = with_string_attribute();
        let nb = NaiveBayes::bind(&table, 1, true).unwrap();
        let err = DistributionTable::init(&nb).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::Configuration(ConfigurationError::UnsupportedAttributeType {
                index: 0,
                ..
            })
        ));
    }

    #[test]
    fn cells_are_writable() {
        let table = mixed_table();
        let nb = NaiveBayes::bind(&table, 2, true).unwrap();
        let mut dt = DistributionTable::init(&nb).unwrap();
        let replacement = Distribution::Gaussian(
            crate::core::estimators::GaussianEstimator::with_parameters(1.0, 2.0),
        );
        *dt.get_mut(1, 0).unwrap() = replacement.clone();
        assert_eq!(dt.get(1, 0), Some(&replacement));
        assert_ne!(dt.get(0, 0), Some(&replacement));
    }
}
