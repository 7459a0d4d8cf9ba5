use std::fmt;

/// Result type for activation operations
pub type Result<T> = std::result::Result<T, ActivationError>;

/// Main error type for the activation layer
#[derive(Debug, Clone, PartialEq)]
pub enum ActivationError {
    /// Activated output and incoming gradient disagree in shape
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Matrix has the wrong shape for the operation (e.g. a Jacobian built from more than one row)
    InvalidShape(String),

    /// Activation name that does not match any known kind
    UnknownActivation(String),

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Non-finite values found where finite ones were required
    NumericalError(String),
}

impl fmt::Display for ActivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            ActivationError::InvalidShape(msg) => write!(f, "Invalid shape: {}", msg),
            ActivationError::UnknownActivation(name) => {
                write!(f, "Unknown activation '{}'", name)
            }
            ActivationError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            ActivationError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for ActivationError {}

// Helper functions for common error patterns
impl ActivationError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        ActivationError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        ActivationError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Fails with [`ActivationError::DimensionMismatch`] unless both shapes are equal.
pub(crate) fn ensure_same_shape(expected: &[usize], actual: &[usize]) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ActivationError::dimension_mismatch(
            format!("{:?}", expected),
            format!("{:?}", actual),
        ))
    }
}
