use std::error::Error;
use std::fmt;

/// Errors raised by the array drills.
#[derive(Debug, Clone, PartialEq)]
pub enum DrillError {
    /// Input had the wrong rank or the wrong number of columns.
    InvalidInputShape {
        expected: String,
        found: Vec<usize>,
    },
    /// The diagnostic plot could not be produced.
    Plot(String),
}

impl DrillError {
    pub fn invalid_shape(expected: impl Into<String>, found: &[usize]) -> Self {
        DrillError::InvalidInputShape {
            expected: expected.into(),
            found: found.to_vec(),
        }
    }
}

impl fmt::Display for DrillError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DrillError::InvalidInputShape { expected, found } => {
                write!(f, "Input array must be {}, got shape {:?}", expected, found)
            }
            DrillError::Plot(msg) => write!(f, "Plotting failed: {}", msg),
        }
    }
}

impl Error for DrillError {}
