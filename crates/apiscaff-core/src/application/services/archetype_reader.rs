//! Reads archetype templates from the workspace.

use tracing::debug;

use crate::{
    application::ports::Filesystem,
    domain::{ArchetypeArtifact, WorkspaceLayout},
    error::ApiscaffResult,
};

/// Loads the raw text of archetype artifacts.
pub struct ArchetypeReader<'a> {
    filesystem: &'a dyn Filesystem,
    layout: &'a WorkspaceLayout,
}

impl<'a> ArchetypeReader<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, layout: &'a WorkspaceLayout) -> Self {
        Self { filesystem, layout }
    }

    /// Raw template text for `artifact`.
    pub fn read(&self, artifact: ArchetypeArtifact) -> ApiscaffResult<String> {
        let path = self.layout.archetype_file(artifact);
        debug!(artifact = %artifact, path = %path.display(), "Reading archetype artifact");
        self.filesystem.read_to_string(&path)
    }
}
