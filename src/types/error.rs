use thiserror::Error;

/// Raised by an operator when its inputs cannot be compared under its coercion rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperatorTypeError {
    #[error("operator '{operator}' cannot compare {left} with {right}")]
    Incomparable {
        operator: String,
        left: &'static str,
        right: &'static str,
    },

    #[error("operator '{operator}' expected {expected}, got {actual}")]
    TypeMismatch {
        operator: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("operator '{operator}' expects a [min, max] pair, got {len} element(s)")]
    InvalidRange { operator: String, len: usize },

    #[error("operator '{operator}' could not parse '{value}' as a date")]
    InvalidDate { operator: String, value: String },

    #[error("operator '{operator}': {message}")]
    Custom { operator: String, message: String },
}

impl OperatorTypeError {
    /// Build a [`OperatorTypeError::Custom`] error for caller-supplied operators.
    pub fn custom(operator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Custom {
            operator: operator.into(),
            message: message.into(),
        }
    }

    /// Name of the operator that raised the error.
    #[must_use]
    pub fn operator(&self) -> &str {
        match self {
            Self::Incomparable { operator, .. }
            | Self::TypeMismatch { operator, .. }
            | Self::InvalidRange { operator, .. }
            | Self::InvalidDate { operator, .. }
            | Self::Custom { operator, .. } => operator,
        }
    }
}
