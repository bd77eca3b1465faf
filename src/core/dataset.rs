use crate::core::attributes::{Attribute, AttributeKind};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance, Value};
use std::sync::Arc;
use thiserror::Error;

/// Read-only labeled table consumed by classifiers.
///
/// Implementors own the rows; classifiers only ever borrow them.
pub trait LabeledTable: Sync {
    fn number_of_instances(&self) -> usize;

    fn number_of_attributes(&self) -> usize;

    fn attribute_at_index(&self, index: usize) -> Option<&Attribute>;

    fn instance_at_index(&self, index: usize) -> Option<&dyn Instance>;

    /// Display name of the category `code` of the attribute at `class_index`.
    fn class_label_name(&self, class_index: usize, code: usize) -> Option<&str> {
        self.attribute_at_index(class_index)?
            .as_nominal()?
            .value_name(code)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TableError {
    #[error("row has {got} values, header declares {expected} attributes")]
    ArityMismatch { expected: usize, got: usize },

    #[error("attribute {attribute} expects a {expected} value, got {found}")]
    KindMismatch {
        attribute: usize,
        expected: AttributeKind,
        found: Value,
    },

    #[error("attribute {attribute} has {cardinality} categories, got code {code}")]
    CategoryOutOfRange {
        attribute: usize,
        code: usize,
        cardinality: usize,
    },

    #[error("attribute {attribute} holds non-finite value {value}")]
    NonFiniteValue { attribute: usize, value: f64 },
}

/// In-memory table whose rows are checked against the header on insertion.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    instances: Vec<DenseInstance>,
}

impl Dataset {
    pub fn new(header: Arc<InstanceHeader>) -> Dataset {
        Dataset {
            header,
            instances: Vec::new(),
        }
    }

    pub fn with_instances<I>(header: Arc<InstanceHeader>, rows: I) -> Result<Dataset, TableError>
    where
        I: IntoIterator<Item = DenseInstance>,
    {
        let mut dataset = Dataset::new(header);
        for row in rows {
            dataset.push(row)?;
        }
        Ok(dataset)
    }

    pub fn push(&mut self, instance: DenseInstance) -> Result<(), TableError> {
        self.check_row(&instance)?;
        self.instances.push(instance);
        Ok(())
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn instances(&self) -> &[DenseInstance] {
        &self.instances
    }

    fn check_row(&self, instance: &DenseInstance) -> Result<(), TableError> {
        let expected = self.header.number_of_attributes();
        if instance.number_of_attributes() != expected {
            return Err(TableError::ArityMismatch {
                expected,
                got: instance.number_of_attributes(),
            });
        }

        for (index, (attribute, value)) in self
            .header
            .attributes
            .iter()
            .zip(&instance.values)
            .enumerate()
        {
            let Some(found) = value.kind() else {
                continue;
            };
            if found != attribute.kind() {
                return Err(TableError::KindMismatch {
                    attribute: index,
                    expected: attribute.kind(),
                    found: value.clone(),
                });
            }
            if let Some(x) = value.as_numeric().filter(|x| !x.is_finite()) {
                return Err(TableError::NonFiniteValue {
                    attribute: index,
                    value: x,
                });
            }
            if let (Some(code), Some(cardinality)) = (value.as_nominal(), attribute.cardinality()) {
                if code >= cardinality {
                    return Err(TableError::CategoryOutOfRange {
                        attribute: index,
                        code,
                        cardinality,
                    });
                }
            }
        }
        Ok(())
    }
}

impl LabeledTable for Dataset {
    fn number_of_instances(&self) -> usize {
        self.instances.len()
    }

    fn number_of_attributes(&self) -> usize {
        self.header.number_of_attributes()
    }

    fn attribute_at_index(&self, index: usize) -> Option<&Attribute> {
        self.header.attribute_at_index(index)
    }

    fn instance_at_index(&self, index: usize) -> Option<&dyn Instance> {
        self.instances.get(index).map(|i| i as &dyn Instance)
    }
}
