//! Error types for value boxes

use thiserror::Error;

/// The error type for extracting a typed value out of a [`Value`](crate::Value)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
}

/// Result type alias for value box operations
pub type Result<T> = std::result::Result<T, ValueError>;

impl ValueError {
    pub(crate) fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        ValueError::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}
