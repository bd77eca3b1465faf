use crate::core::instances::{Instance, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct DenseInstance {
    pub values: Vec<Value>,
}

impl DenseInstance {
    pub fn new(values: Vec<Value>) -> DenseInstance {
        DenseInstance { values }
    }
}

impl<V: Into<Value>> FromIterator<V> for DenseInstance {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        DenseInstance::new(iter.into_iter().map(Into::into).collect())
    }
}

impl Instance for DenseInstance {
    fn value_at_index(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    fn number_of_attributes(&self) -> usize {
        self.values.len()
    }

    fn to_vec(&self) -> Vec<Value> {
        self.values.clone()
    }
}
