//! Unified error handling for apiscaff core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for apiscaff core operations.
#[derive(Debug, Error, Clone)]
pub enum ApiscaffError {
    /// Errors from the domain layer (invalid input, malformed manifests).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, subprocess).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ApiscaffError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in apiscaff".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Manifest => ErrorCategory::Manifest,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Manifest,
    Conflict,
    NotFound,
    ExternalCommand,
    Internal,
}

/// Convenient result type alias.
pub type ApiscaffResult<T> = Result<T, ApiscaffError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_display_transparently() {
        let err: ApiscaffError = DomainError::InvalidInput { field: "input" }.into();
        assert_eq!(err.to_string(), "Invalid input: input is required");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn project_exists_is_conflict() {
        let err: ApiscaffError = ApplicationError::ProjectExists {
            name: "orders".into(),
            path: PathBuf::from("projects/orders"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.to_string().contains("orders"));
    }

    #[test]
    fn external_command_suggests_path_check() {
        let err: ApiscaffError = ApplicationError::ExternalCommand {
            command: "tsp-openapi3".into(),
            reason: "exit status: 1".into(),
        }
        .into();
        assert!(err.suggestions().iter().any(|s| s.contains("PATH")));
    }
}
