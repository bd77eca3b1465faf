use crate::core::attributes::AttributeKind;
use std::fmt;

/// One cell of an instance.
///
/// `Missing` carries no payload; statistics must skip it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nominal(usize),
    Numeric(f64),
    Text(String),
    Missing,
}

impl Value {
    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    #[inline]
    pub fn as_nominal(&self) -> Option<usize> {
        match self {
            Value::Nominal(code) => Some(*code),
            _ => None,
        }
    }

    #[inline]
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Value::Numeric(x) => Some(*x),
            _ => None,
        }
    }

    /// Attribute kind this payload belongs to; `None` when missing.
    pub fn kind(&self) -> Option<AttributeKind> {
        match self {
            Value::Nominal(_) => Some(AttributeKind::Nominal),
            Value::Numeric(_) => Some(AttributeKind::Numeric),
            Value::Text(_) => Some(AttributeKind::String),
            Value::Missing => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nominal(code) => write!(f, "#{code}"),
            Value::Numeric(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Missing => write!(f, "?"),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Numeric(value)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Nominal(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Missing, Into::into)
    }
}
