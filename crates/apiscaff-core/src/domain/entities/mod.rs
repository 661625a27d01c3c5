pub mod archetype;
pub mod dist;
pub mod layout;
pub mod manifest;

pub use crate::domain::DomainError;
pub use archetype::ArchetypeArtifact;
pub use dist::{ArtifactFormat, DistFile};
pub use layout::WorkspaceLayout;
pub use manifest::{BuildManifest, BuildScripts, ProjectManifest};
