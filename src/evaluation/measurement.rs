use std::fmt;

/// One named scalar of an [`Evaluation`](crate::evaluation::Evaluation).
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn accuracy(value: f64) -> Self {
        Self::new("accuracy", value)
    }

    /// Precision of predictions of `class`, named `trust_class_{class}`.
    pub fn trust(class: usize, value: f64) -> Self {
        Self::new(format!("trust_class_{class}"), value)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:.4}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_constructors_and_display() {
        assert_eq!(Measurement::accuracy(0.75).to_string(), "accuracy=0.7500");
        let t = Measurement::trust(3, 1.0);
        assert_eq!(t.name, "trust_class_3");
        assert_eq!(t.to_string(), "trust_class_3=1.0000");
    }
}
