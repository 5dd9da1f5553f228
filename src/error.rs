//! Error type shared by every entry point.

use thiserror::Error;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Failure of an allocation computation.
///
/// Deadline misses are not errors; they are reported in
/// [`Schedule::overdue`](crate::models::Schedule::overdue).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    /// One or more inputs fell outside their recognized shape or range.
    ///
    /// Carries every problem found, not only the first.
    #[error("invalid parameter: {}", join_messages(.0))]
    InvalidParameter(Vec<ValidationError>),
}

impl AllocationError {
    /// Builds an `InvalidParameter` error with a single problem.
    pub fn invalid(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self::InvalidParameter(vec![ValidationError::new(kind, message)])
    }

    /// All validation problems carried by this error.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidParameter(errors) => errors,
        }
    }

    /// Whether any carried problem has the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.errors().iter().any(|e| e.kind == kind)
    }
}

impl From<Vec<ValidationError>> for AllocationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidParameter(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
