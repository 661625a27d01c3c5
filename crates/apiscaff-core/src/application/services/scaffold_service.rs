//! Scaffold Service - creates API projects from the archetype.
//!
//! The workflow for a new project is strictly sequential:
//! 1. Existence check
//! 2. Directory creation
//! 3. Manifest render
//! 4. Tool-config render
//! 5. Main schema render (skipped when importing)
//! 6. Build script registration
//!
//! A failing step aborts the remaining ones. Nothing already written is
//! rolled back.

use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem, services::ArchetypeReader},
    domain::{
        ArchetypeArtifact, BuildManifest, BuildScripts, ProjectManifest, ProjectName,
        Registration, RenderContext, WorkspaceLayout,
    },
    error::ApiscaffResult,
};

/// What a successful scaffold produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub registration: Registration,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    layout: WorkspaceLayout,
}

impl ScaffoldService {
    /// Create a new scaffold service over the given filesystem and layout.
    pub fn new(filesystem: Box<dyn Filesystem>, layout: WorkspaceLayout) -> Self {
        Self { filesystem, layout }
    }

    pub fn layout(&self) -> &WorkspaceLayout {
        &self.layout
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    /// Create a new project rendered entirely from the archetype.
    #[instrument(skip_all, fields(project = %name))]
    pub fn create_project(&self, name: &ProjectName) -> ApiscaffResult<ScaffoldReport> {
        self.ensure_absent(name)?;
        info!("Creating API project");

        let mut files = self.build_shell(name)?;
        files.push(self.render_main_artifact(name)?);
        let registration = self.register_build_scripts(name)?;

        info!(files = files.len(), "Project created");
        Ok(ScaffoldReport {
            project_dir: self.layout.project_dir(name),
            files,
            registration,
        })
    }

    /// Fail with [`ApplicationError::ProjectExists`] when the project
    /// directory is already present.
    pub fn ensure_absent(&self, name: &ProjectName) -> ApiscaffResult<()> {
        if self.exists_project(name) {
            return Err(ApplicationError::ProjectExists {
                name: name.to_string(),
                path: self.layout.project_dir(name),
            }
            .into());
        }
        Ok(())
    }

    /// Directory, manifest and tool configs: everything except the main
    /// schema and the build scripts.
    pub(crate) fn build_shell(&self, name: &ProjectName) -> ApiscaffResult<Vec<PathBuf>> {
        self.create_project_directory(name)?;
        let mut files = vec![self.render_manifest(name)?];
        files.extend(self.render_tool_configs(name)?);
        Ok(files)
    }

    // -------------------------------------------------------------------------
    // Steps
    // -------------------------------------------------------------------------

    /// Whether `projects/<name>` exists. Only presence is checked, not
    /// completeness.
    pub fn exists_project(&self, name: &ProjectName) -> bool {
        self.filesystem.exists(&self.layout.project_dir(name))
    }

    /// Create `projects/<name>` and any missing ancestors. Idempotent.
    pub fn create_project_directory(&self, name: &ProjectName) -> ApiscaffResult<PathBuf> {
        let dir = self.layout.project_dir(name);
        self.filesystem.create_dir_all(&dir)?;
        debug!(path = %dir.display(), "Project directory ready");
        Ok(dir)
    }

    /// Render the archetype `config.json` into the project.
    pub fn render_manifest(&self, name: &ProjectName) -> ApiscaffResult<PathBuf> {
        let template = self.reader().read(ArchetypeArtifact::Manifest)?;
        let manifest = ProjectManifest::parse(&template)?.render(&RenderContext::for_project(name))?;

        self.write_artifact(name, ArchetypeArtifact::Manifest, &manifest.to_pretty_json()?)
    }

    /// Render both tool configs into `<template>.yaml` files.
    pub fn render_tool_configs(&self, name: &ProjectName) -> ApiscaffResult<Vec<PathBuf>> {
        let ctx = RenderContext::for_project(name);
        let reader = self.reader();

        ArchetypeArtifact::TOOL_CONFIGS
            .into_iter()
            .map(|artifact| {
                let template = reader.read(artifact)?;
                self.write_artifact(name, artifact, &ctx.render(&template))
            })
            .collect()
    }

    /// Render the main schema with title-cased name and identifier-cased
    /// namespace.
    pub fn render_main_artifact(&self, name: &ProjectName) -> ApiscaffResult<PathBuf> {
        let ctx = RenderContext::for_main_schema(name)?;
        let template = self.reader().read(ArchetypeArtifact::MainSchema)?;

        self.write_artifact(name, ArchetypeArtifact::MainSchema, &ctx.render(&template))
    }

    /// Add the project's scripts to `package.json` and chain its compile
    /// entry onto `build:all`, rewriting the file in full.
    pub fn register_build_scripts(&self, name: &ProjectName) -> ApiscaffResult<Registration> {
        let path = self.layout.package_manifest_path();
        let mut manifest = BuildManifest::parse(&self.filesystem.read_to_string(&path)?)?;

        let scripts = BuildScripts::for_project(name, &self.layout.projects_dir_for_scripts());
        let registration = manifest.register(&scripts)?;
        if registration.duplicated_in_build_all {
            warn!(
                script = scripts.compile_key(),
                "build:all already chained this project; entry appended again"
            );
        }

        self.filesystem.write_file(&path, &manifest.to_pretty_json()?)?;
        debug!(path = %path.display(), "Build scripts registered");
        Ok(registration)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn reader(&self) -> ArchetypeReader<'_> {
        ArchetypeReader::new(self.filesystem.as_ref(), &self.layout)
    }

    fn write_artifact(
        &self,
        name: &ProjectName,
        artifact: ArchetypeArtifact,
        content: &str,
    ) -> ApiscaffResult<PathBuf> {
        let path = self.layout.project_file(name, artifact.output_name());
        self.filesystem.write_file(&path, content)?;
        debug!(artifact = %artifact, path = %path.display(), "Artifact written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockFilesystem;
    use crate::error::ApiscaffError;

    fn name(s: &str) -> ProjectName {
        ProjectName::new(s).unwrap()
    }

    #[test]
    fn existing_project_is_rejected_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|path| path.ends_with("projects/orders"))
            .times(1)
            .return_const(true);
        // No other expectation: any write or mkdir would panic.

        let service = ScaffoldService::new(Box::new(fs), WorkspaceLayout::new("/ws"));
        let err = service.create_project(&name("orders")).unwrap_err();

        assert!(matches!(
            err,
            ApiscaffError::Application(ApplicationError::ProjectExists { .. })
        ));
    }

    #[test]
    fn missing_archetype_aborts_after_directory_creation() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_read_to_string().times(1).returning(|path| {
            Err(ApplicationError::NotFound {
                path: path.to_path_buf(),
            }
            .into())
        });

        let service = ScaffoldService::new(Box::new(fs), WorkspaceLayout::new("/ws"));
        let err = service.create_project(&name("orders")).unwrap_err();

        assert!(matches!(
            err,
            ApiscaffError::Application(ApplicationError::NotFound { .. })
        ));
    }
}
