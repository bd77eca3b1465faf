/// Free-text attribute. Carried by tables but not modeled by any estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct StringAttribute {
    pub name: String,
}

impl StringAttribute {
    pub fn new(name: String) -> StringAttribute {
        StringAttribute { name }
    }
}
