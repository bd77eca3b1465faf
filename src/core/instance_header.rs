use crate::core::attributes::Attribute;

/// Ordered attribute descriptors shared by every row of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<Attribute>,
}

impl InstanceHeader {
    pub fn new(relation_name: String, attributes: Vec<Attribute>) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes,
        }
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&Attribute> {
        self.attributes.get(index)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|attr| attr.name() == name)
    }
}
