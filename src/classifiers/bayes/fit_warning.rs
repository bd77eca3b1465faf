use std::fmt;

/// Non-fatal condition met while fitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitWarning {
    /// No training instance carries this class; its prior is zero.
    EmptyClass { class: usize, name: String },
}

impl fmt::Display for FitWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitWarning::EmptyClass { class, name } => {
                write!(f, "no training instance belongs to class {name} ({class})")
            }
        }
    }
}
