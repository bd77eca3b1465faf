use crate::core::instances::Value;

/// Read-only view of one row of a labeled table.
pub trait Instance {
    fn value_at_index(&self, index: usize) -> Option<&Value>;

    fn number_of_attributes(&self) -> usize;

    /// `None` when `index` is out of bounds.
    fn is_missing_at_index(&self, index: usize) -> Option<bool> {
        self.value_at_index(index).map(Value::is_missing)
    }

    fn to_vec(&self) -> Vec<Value>;
}
