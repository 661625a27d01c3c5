// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through the application layer by value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A text transform received empty input it cannot work with.
    #[error("Invalid input: {field} is required")]
    InvalidInput { field: &'static str },

    /// A project name that cannot be used as a path segment.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    /// JSON manifest could not be parsed or has the wrong shape.
    #[error("Invalid manifest {manifest}: {reason}")]
    InvalidManifest { manifest: String, reason: String },

    /// A field the operation depends on is absent.
    #[error("Manifest {manifest} is missing required field '{field}'")]
    MissingManifestField {
        manifest: String,
        field: &'static str,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { field } => vec![
                format!("Provide a non-empty {field}"),
                "Project names look like: orders, billing-api, pet_store".into(),
            ],
            Self::InvalidProjectName { name, reason } => vec![
                format!("'{name}' cannot be used: {reason}"),
                "Use a relative name such as 'orders' or 'team/orders'".into(),
            ],
            Self::InvalidManifest { manifest, .. } => vec![
                format!("Check that {manifest} contains a valid JSON object"),
            ],
            Self::MissingManifestField { manifest, field } => vec![
                format!("Add a \"{field}\" entry to {manifest}"),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::InvalidProjectName { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidManifest { .. } | Self::MissingManifestField { .. } => {
                ErrorCategory::Manifest
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Manifest,
}
