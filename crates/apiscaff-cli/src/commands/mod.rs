//! Command handlers.
//!
//! Each handler translates parsed arguments into calls on the core services
//! and prints progress. No business logic lives here.

use std::path::PathBuf;

use apiscaff_core::{domain::ProjectName, error::ApiscaffError};

use crate::error::{CliError, CliResult};

pub mod completions;
pub mod config;
pub mod import;
pub mod init;
pub mod new;
pub mod postbuild;

/// Validate the project name positional: present, non-empty, and a safe
/// relative path.
pub(crate) fn project_name(value: Option<String>) -> CliResult<ProjectName> {
    let raw = value
        .filter(|v| !v.is_empty())
        .ok_or(CliError::MissingArgument {
            argument: "project name",
        })?;
    ProjectName::new(raw).map_err(|e| ApiscaffError::from(e).into())
}

/// Validate the specification file positional: present and non-empty.
pub(crate) fn spec_file(value: Option<PathBuf>) -> CliResult<PathBuf> {
    value
        .filter(|v| !v.as_os_str().is_empty())
        .ok_or(CliError::MissingArgument {
            argument: "path to the API file",
        })
}

/// The name as typed, for failure summaries.
pub(crate) fn display_name(value: Option<&String>) -> &str {
    value.map(String::as_str).unwrap_or_default()
}
