use std::collections::HashMap;

/// Categorical attribute; a value's code is its position in `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String) -> NominalAttribute {
        NominalAttribute {
            name,
            values: Vec::new(),
            label_to_index: HashMap::new(),
        }
    }

    pub fn with_values(
        name: String,
        values: Vec<String>,
        label_to_index: HashMap<String, usize>,
    ) -> NominalAttribute {
        NominalAttribute {
            name,
            values,
            label_to_index,
        }
    }

    pub fn from_labels<N, I, S>(name: N, labels: I) -> NominalAttribute
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = labels.into_iter().map(Into::into).collect();
        let label_to_index = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        NominalAttribute::with_values(name.into(), values, label_to_index)
    }

    pub fn cardinality(&self) -> usize {
        self.values.len()
    }

    pub fn index_of_value(&self, v: &str) -> Option<usize> {
        self.label_to_index
            .get(v)
            .copied()
            .or_else(|| self.values.iter().position(|x| x == v))
    }

    pub fn value_name(&self, code: usize) -> Option<&str> {
        self.values.get(code).map(String::as_str)
    }

    pub fn enumerate_values(&self) -> impl Iterator<Item = (usize, &String)> {
        self.values.iter().enumerate()
    }
}
