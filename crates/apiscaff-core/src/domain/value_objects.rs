//! Domain value objects.

use std::fmt;
use std::path::{Component, Path};

use crate::domain::error::DomainError;

/// Name of an API project.
///
/// The name is used verbatim as a path segment below the projects, staging,
/// doc and dist directories, so `team/orders` produces nested directories.
/// It must be non-empty and must stay relative: absolute paths and `..`
/// components are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DomainError::InvalidInput {
                field: "project name",
            });
        }

        let path = Path::new(&name);
        if path.has_root() || path.is_absolute() {
            return Err(DomainError::InvalidProjectName {
                name,
                reason: "must be a relative path".into(),
            });
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return Err(DomainError::InvalidProjectName {
                name,
                reason: "must not contain '..'".into(),
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Relative path form of the name.
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_nested_names_are_valid() {
        for name in ["orders", "hello-world", "my_api", "team/orders", "test@project#123"] {
            assert!(ProjectName::new(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn empty_name_is_invalid_input() {
        assert_eq!(
            ProjectName::new(""),
            Err(DomainError::InvalidInput {
                field: "project name"
            })
        );
    }

    #[test]
    fn absolute_name_is_rejected() {
        assert!(matches!(
            ProjectName::new("/etc/orders"),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn parent_traversal_is_rejected() {
        assert!(matches!(
            ProjectName::new("../orders"),
            Err(DomainError::InvalidProjectName { .. })
        ));
        assert!(ProjectName::new("team/../../orders").is_err());
    }

    #[test]
    fn nested_name_maps_to_nested_path() {
        let name = ProjectName::new("team/orders").unwrap();
        let mut parts = name.as_path().components();
        assert_eq!(parts.next(), Some(Component::Normal("team".as_ref())));
        assert_eq!(parts.next(), Some(Component::Normal("orders".as_ref())));
        assert_eq!(parts.next(), None);
    }
}
