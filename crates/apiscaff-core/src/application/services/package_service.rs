//! Package Service - publishes compiled artifacts under versioned names.

use std::path::PathBuf;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{ArchetypeArtifact, DistFile, ProjectManifest, ProjectName, WorkspaceLayout, artifact_names},
    error::ApiscaffResult,
};

/// What a post-build run published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub version: String,
    pub files: Vec<PathBuf>,
}

/// Post-build packaging service.
pub struct PackageService {
    filesystem: Box<dyn Filesystem>,
    layout: WorkspaceLayout,
}

impl PackageService {
    pub fn new(filesystem: Box<dyn Filesystem>, layout: WorkspaceLayout) -> Self {
        Self { filesystem, layout }
    }

    /// Resolve version and names, then publish every artifact.
    #[instrument(skip_all, fields(project = %name))]
    pub fn package(&self, name: &ProjectName) -> ApiscaffResult<PackageReport> {
        let version = self.resolve_version(name)?;
        let names = self.resolve_artifact_names(name)?;
        let files = self.publish(&names, name, &version)?;

        info!(version = %version, files = files.len(), "Artifacts published");
        Ok(PackageReport { version, files })
    }

    /// The manifest's `version`, or `0.0.0`.
    pub fn resolve_version(&self, name: &ProjectName) -> ApiscaffResult<String> {
        Ok(self.manifest(name)?.resolved_version().to_owned())
    }

    /// `<filename>-x.y.z.json` and `<filename>-x.y.z.yaml`, with `filename`
    /// defaulting to `api`.
    pub fn resolve_artifact_names(&self, name: &ProjectName) -> ApiscaffResult<Vec<String>> {
        Ok(artifact_names(self.manifest(name)?.resolved_filename()))
    }

    /// Copy each named artifact from `doc/api-<name>` into
    /// `dist/api-<name>` under its versioned name.
    ///
    /// A missing source aborts at once; artifacts already copied stay.
    pub fn publish(
        &self,
        names: &[String],
        project: &ProjectName,
        version: &str,
    ) -> ApiscaffResult<Vec<PathBuf>> {
        let source_dir = self.layout.doc_dir_for(project);
        let target_dir = self.layout.dist_dir_for(project);
        let mut published = Vec::with_capacity(names.len());

        for source_name in names {
            let content = self.filesystem.read(&source_dir.join(source_name))?;
            let destination = DistFile::new(source_name.as_str(), version).destination_name()?;

            // Nested project names put a `/` into the artifact name itself.
            let target = target_dir.join(&destination);
            self.filesystem
                .create_dir_all(target.parent().unwrap_or(target_dir.as_path()))?;
            self.filesystem.write(&target, &content)?;

            debug!(source = %source_name, target = %target.display(), "Artifact published");
            published.push(target);
        }

        Ok(published)
    }

    fn manifest(&self, name: &ProjectName) -> ApiscaffResult<ProjectManifest> {
        let path = self
            .layout
            .project_file(name, ArchetypeArtifact::Manifest.output_name());
        Ok(ProjectManifest::parse(&self.filesystem.read_to_string(&path)?)?)
    }
}
