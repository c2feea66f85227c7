use serde::{Deserialize, Serialize};

/// A rule rejected a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationFailure {
    /// Human-readable message shown next to the field.
    pub message: String,
}

impl ValidationFailure {
    /// Create a new failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of running a rule, or a chain of rules, against one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// The value passed.
    #[default]
    Valid,
    /// The value was rejected.
    Invalid(ValidationFailure),
}

impl ValidationOutcome {
    /// Create an invalid outcome with the given message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(ValidationFailure::new(message))
    }

    /// Check if the value passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if the value was rejected.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The failure message, or `""` for a valid outcome.
    pub fn message(&self) -> &str {
        match self {
            Self::Valid => "",
            Self::Invalid(failure) => &failure.message,
        }
    }

    /// Get the failure (if any).
    pub fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Valid => None,
            Self::Invalid(failure) => Some(failure),
        }
    }

    /// Convert into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(failure) => Err(failure),
        }
    }
}
