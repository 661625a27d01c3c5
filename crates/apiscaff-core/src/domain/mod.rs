//! Core domain layer for apiscaff.
//!
//! Pure logic with no I/O: the text transforms, placeholder slots, the
//! archetype artifact set, manifests and distribution naming. Filesystem
//! and subprocess access go through ports defined in the application
//! layer.

pub mod entities;
pub mod error;
pub mod placeholder;
pub mod text;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    archetype::ArchetypeArtifact,
    dist::{ArtifactFormat, DistFile, artifact_names},
    layout::WorkspaceLayout,
    manifest::{
        BUILD_ALL_SCRIPT, BuildManifest, BuildScripts, DEFAULT_FILENAME, ProjectManifest,
        Registration,
    },
};

pub use error::{DomainError, ErrorCategory};
pub use placeholder::{Placeholder, RenderContext};
pub use text::{
    DEFAULT_VERSION, VERSION_TOKEN, substitute_placeholder, substitute_version_token,
    to_identifier_case, to_title_case,
};
pub use value_objects::ProjectName;
