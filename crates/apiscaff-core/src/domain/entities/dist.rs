//! Versioned distribution artifacts.

use std::fmt;

use crate::domain::{
    error::DomainError,
    text::{VERSION_TOKEN, substitute_version_token},
};

/// Output format emitted by the TypeSpec compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Json,
    Yaml,
}

impl ArtifactFormat {
    pub const ALL: [ArtifactFormat; 2] = [ArtifactFormat::Json, ArtifactFormat::Yaml];

    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Built artifact names for a base name: `<base>-x.y.z.<ext>`, one per
/// [`ArtifactFormat`].
pub fn artifact_names(base: &str) -> Vec<String> {
    ArtifactFormat::ALL
        .iter()
        .map(|format| format!("{base}-{VERSION_TOKEN}.{}", format.extension()))
        .collect()
}

/// A built artifact paired with the version it is published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistFile {
    pub source_name: String,
    pub version: String,
}

impl DistFile {
    pub fn new(source_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            version: version.into(),
        }
    }

    /// Source name with the version token replaced.
    pub fn destination_name(&self) -> Result<String, DomainError> {
        substitute_version_token(&self.source_name, Some(&self.version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_names_cover_json_and_yaml() {
        assert_eq!(
            artifact_names("api-orders"),
            ["api-orders-x.y.z.json", "api-orders-x.y.z.yaml"]
        );
    }

    #[test]
    fn default_base_name() {
        assert_eq!(artifact_names("api")[0], "api-x.y.z.json");
    }

    #[test]
    fn destination_name_carries_version() {
        let file = DistFile::new("api-orders-x.y.z.json", "2.0.0");
        assert_eq!(file.destination_name().unwrap(), "api-orders-2.0.0.json");
    }

    #[test]
    fn empty_source_name_is_invalid() {
        assert!(DistFile::new("", "1.0.0").destination_name().is_err());
    }
}
