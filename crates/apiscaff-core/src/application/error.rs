//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Project already exists at target location.
    #[error("API project {name} already exists at {path}")]
    ProjectExists { name: String, path: PathBuf },

    /// A file or directory the operation needs is missing.
    #[error("Not found: {path}")]
    NotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The spec converter could not be started or exited unsuccessfully.
    #[error("External command '{command}' failed: {reason}")]
    ExternalCommand { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { name, path } => vec![
                format!("Directory already exists: {}", path.display()),
                format!("Choose a different project name than '{name}'"),
            ],
            Self::NotFound { path } => vec![
                format!("Missing: {}", path.display()),
                "Run 'apiscaff init' to seed the archetype directory".into(),
                "For postbuild, compile the project first (npm run compile:<name>)".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ExternalCommand { command, .. } => vec![
                format!("Ensure '{command}' is installed and in your PATH"),
                "Check the command output above for details".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Conflict,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ExternalCommand { .. } => ErrorCategory::ExternalCommand,
        }
    }
}
