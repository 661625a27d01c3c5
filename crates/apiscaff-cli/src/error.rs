//! Error handling for the apiscaff CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use apiscaff_core::error::ApiscaffError;

// Re-export so callers only need `use crate::error::*`.
pub use apiscaff_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Exit status shared by every failure past argument parsing.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required positional argument was absent or empty.
    #[error("No {argument} specified")]
    MissingArgument { argument: &'static str },

    /// A command failed; `summary` names what was being attempted.
    #[error("{summary}")]
    CommandFailed {
        summary: String,
        #[source]
        cause: Box<CliError>,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `apiscaff-core`.
    #[error(transparent)]
    Core(#[from] ApiscaffError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Wrap `self` under a "Failed to ..." summary.
    pub fn context(self, summary: impl Into<String>) -> Self {
        Self::CommandFailed {
            summary: summary.into(),
            cause: Box::new(self),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingArgument { argument } => vec![
                format!("Pass the {argument} as an argument"),
                "Use --help for usage information".into(),
            ],

            Self::CommandFailed { cause, .. } => cause.suggestions(),

            Self::ConfigError { message, .. } => {
                let mut suggestions = vec![format!("Configuration issue: {}", message)];
                if let Some(path) = crate::config::AppConfig::user_config_path() {
                    suggestions.push(format!(
                        "Check apiscaff.toml or your user config at {}",
                        path.display()
                    ));
                }
                suggestions.push("Run 'apiscaff init' to write a default apiscaff.toml".into());
                suggestions
            }

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get the error category for styling and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingArgument { .. } => ErrorCategory::UserError,
            Self::CommandFailed { cause, .. } => cause.category(),
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Manifest | CoreCategory::Conflict => {
                    ErrorCategory::UserError
                }
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::ExternalCommand => ErrorCategory::ExternalCommand,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Every failure kind shares [`FAILURE_EXIT_CODE`]; argument parse
    /// errors exit with 2 before a `CliError` exists.
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }

    /// Format the error for display with colors and suggestions.
    ///
    /// The cause chain is always shown; `verbose` only drops the hint line.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        output.push_str(&format!("  {}\n", self.to_string().red()));

        for err in self.chain() {
            output.push_str(&format!("  {} {}\n", "→".dimmed(), err.to_string().dimmed()));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        for err in self.chain() {
            out.push_str(&format!("  Caused by: {err}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::ExternalCommand => tracing::error!("Converter failed: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        for cause in self.chain() {
            tracing::debug!("Caused by: {}", cause);
        }
    }

    fn chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(self.source(), |&err| err.source())
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments, conflicts).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// The external converter failed.
    ExternalCommand,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for anyhow::Result<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: format!("{}: {e:#}", f().into()),
            source: Some(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiscaff_core::application::ApplicationError;
    use std::io;
    use std::path::PathBuf;

    fn project_exists() -> CliError {
        CliError::Core(
            ApplicationError::ProjectExists {
                name: "orders".into(),
                path: PathBuf::from("/ws/projects/orders"),
            }
            .into(),
        )
    }

    #[test]
    fn missing_argument_message() {
        let err = CliError::MissingArgument {
            argument: "project name",
        };
        assert_eq!(err.to_string(), "No project name specified");
    }

    #[test]
    fn every_failure_exits_with_one() {
        assert_eq!(project_exists().exit_code(), 1);
        assert_eq!(
            CliError::MissingArgument { argument: "x" }.exit_code(),
            1
        );
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn context_keeps_cause_category_and_suggestions() {
        let err = project_exists().context("Failed to create API project orders");
        assert_eq!(err.to_string(), "Failed to create API project orders");
        assert_eq!(err.category(), ErrorCategory::UserError);
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("different project name"))
        );
    }

    #[test]
    fn format_plain_shows_summary_then_cause() {
        let err = project_exists().context("Failed to create API project orders");
        let s = err.format_plain(false);

        let summary = s.find("Error: Failed to create API project orders").unwrap();
        let cause = s.find("Caused by: API project orders already exists").unwrap();
        assert!(summary < cause);
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn chain_walks_every_nested_cause() {
        let err = CliError::MissingArgument {
            argument: "project name",
        }
        .context("Importing pets")
        .context("Failed to create API project pets");

        let causes: Vec<String> = err.chain().map(ToString::to_string).collect();
        assert_eq!(causes, ["Importing pets", "No project name specified"]);
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = CliError::MissingArgument { argument: "x" }.format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "writing apiscaff.toml");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }

    #[test]
    fn into_cli_anyhow_is_config_error() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("bad toml"));
        let cli = result.with_cli_context(|| "loading configuration");
        assert!(matches!(cli, Err(CliError::ConfigError { .. })));
    }
}
