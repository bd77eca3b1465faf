use crate::core::attributes::{NominalAttribute, NumericAttribute, StringAttribute};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Type tag of an attribute column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum AttributeKind {
    Nominal,
    Numeric,
    String,
}

/// Immutable descriptor of one column of a labeled table.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Nominal(NominalAttribute),
    Numeric(NumericAttribute),
    String(StringAttribute),
}

impl Attribute {
    pub fn name(&self) -> &str {
        match self {
            Attribute::Nominal(a) => &a.name,
            Attribute::Numeric(a) => &a.name,
            Attribute::String(a) => &a.name,
        }
    }

    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Nominal(_) => AttributeKind::Nominal,
            Attribute::Numeric(_) => AttributeKind::Numeric,
            Attribute::String(_) => AttributeKind::String,
        }
    }

    pub fn as_nominal(&self) -> Option<&NominalAttribute> {
        match self {
            Attribute::Nominal(a) => Some(a),
            _ => None,
        }
    }

    /// Number of possible category codes; `None` for non-nominal attributes.
    pub fn cardinality(&self) -> Option<usize> {
        self.as_nominal().map(NominalAttribute::cardinality)
    }

}

impl From<NominalAttribute> for Attribute {
    fn from(value: NominalAttribute) -> Self {
        Attribute::Nominal(value)
    }
}

impl From<NumericAttribute> for Attribute {
    fn from(value: NumericAttribute) -> Self {
        Attribute::Numeric(value)
    }
}

impl From<StringAttribute> for Attribute {
    fn from(value: StringAttribute) -> Self {
        Attribute::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn kind_and_cardinality_follow_variant() {
        let color: Attribute = NominalAttribute::from_labels("color", ["red", "green"]).into();
        let size: Attribute = NumericAttribute::new("size".into()).into();
        let note: Attribute = StringAttribute::new("note".into()).into();

        assert_eq!(color.kind(), AttributeKind::Nominal);
        assert_eq!(color.cardinality(), Some(2));
        assert_eq!(size.kind(), AttributeKind::Numeric);
        assert_eq!(size.cardinality(), None);
        assert_eq!(note.kind(), AttributeKind::String);
    }

    #[test]
    fn kind_round_trips_through_text() {
        assert_eq!(AttributeKind::Numeric.to_string(), "numeric");
        assert_eq!(
            AttributeKind::from_str("nominal").unwrap(),
            AttributeKind::Nominal
        );
    }
}
