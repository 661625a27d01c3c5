//! Pure string transforms used while rendering archetypes and naming
//! distribution files. No I/O happens here.

use crate::domain::error::DomainError;

/// Placeholder segment in built artifact names, e.g. `api-x.y.z.json`.
pub const VERSION_TOKEN: &str = "x.y.z";

/// Version used when a manifest or caller does not provide one.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Replace every occurrence of `token` in `text` with `value`.
pub fn substitute_placeholder(text: &str, token: &str, value: &str) -> String {
    if token.is_empty() {
        return text.to_owned();
    }
    text.replace(token, value)
}

/// `my-project_name` → `MyProjectName`.
pub fn to_identifier_case(input: &str) -> Result<String, DomainError> {
    Ok(capitalized_segments(input)?.concat())
}

/// `hello-world` → `Hello World`.
///
/// Only the first character of each segment changes, so `helloWorld-Api`
/// becomes `HelloWorld Api`.
pub fn to_title_case(input: &str) -> Result<String, DomainError> {
    Ok(capitalized_segments(input)?.join(" "))
}

/// Replace the first `x.y.z` in `filename` with `version`
/// ([`DEFAULT_VERSION`] when `None`).
pub fn substitute_version_token(filename: &str, version: Option<&str>) -> Result<String, DomainError> {
    if filename.is_empty() {
        return Err(DomainError::InvalidInput { field: "filename" });
    }
    let version = version.unwrap_or(DEFAULT_VERSION);
    Ok(filename.replacen(VERSION_TOKEN, version, 1))
}

fn capitalized_segments(input: &str) -> Result<Vec<String>, DomainError> {
    if input.is_empty() {
        return Err(DomainError::InvalidInput { field: "input" });
    }

    Ok(input
        .split(['-', '_'])
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect())
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
