//! Import Service - builds a project around an existing OpenAPI document.
//!
//! The document is converted into a staging directory, the project shell is
//! rendered from the archetype, and the converted `main.tsp` replaces the
//! archetype's main schema.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, SpecConverter},
        services::{ScaffoldReport, ScaffoldService},
    },
    domain::{ArchetypeArtifact, ProjectName},
    error::ApiscaffResult,
};

/// Temporary directory owned by a single import.
///
/// The directory is removed by [`StagingArea::release`] on success, and by
/// `Drop` on every other exit path. Removal failures during `Drop` are
/// logged, never raised. `release` reports them to the caller.
pub struct StagingArea<'a> {
    filesystem: &'a dyn Filesystem,
    path: PathBuf,
    released: bool,
}

impl<'a> StagingArea<'a> {
    /// Create the staging directory.
    pub fn create(filesystem: &'a dyn Filesystem, path: PathBuf) -> ApiscaffResult<Self> {
        filesystem.create_dir_all(&path)?;
        debug!(path = %path.display(), "Staging directory created");
        Ok(Self {
            filesystem,
            path,
            released: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the staging directory, reporting failure to the caller.
    pub fn release(mut self) -> ApiscaffResult<()> {
        self.released = true;
        self.filesystem.remove_dir_all(&self.path)?;
        debug!(path = %self.path.display(), "Staging directory removed");
        Ok(())
    }
}

impl Drop for StagingArea<'_> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = self.filesystem.remove_dir_all(&self.path) {
            warn!(
                error = %e,
                path = %self.path.display(),
                "Failed to remove staging directory"
            );
        } else {
            debug!(path = %self.path.display(), "Staging directory removed after failure");
        }
    }
}

/// Service for importing OpenAPI documents as new projects.
pub struct ImportService {
    scaffold: ScaffoldService,
    converter: Box<dyn SpecConverter>,
}

impl ImportService {
    pub fn new(scaffold: ScaffoldService, converter: Box<dyn SpecConverter>) -> Self {
        Self {
            scaffold,
            converter,
        }
    }

    /// Import `spec_file` into a new project `name`.
    ///
    /// Sequence: stage → convert → directory, manifest and tool configs →
    /// promote converted main schema → register build scripts → unstage.
    #[instrument(skip_all, fields(project = %name, spec = %spec_file.display()))]
    pub fn import_project(
        &self,
        name: &ProjectName,
        spec_file: &Path,
    ) -> ApiscaffResult<ScaffoldReport> {
        self.scaffold.ensure_absent(name)?;
        info!("Importing API specification");

        let staging = self.stage_directory(name)?;
        self.convert(spec_file, &staging)?;

        let mut files = self.scaffold.build_shell(name)?;
        files.push(self.promote_main_artifact(name, &staging)?);
        let registration = self.scaffold.register_build_scripts(name)?;

        // Project is complete; a cleanup failure is only logged.
        if let Err(e) = staging.release() {
            warn!(error = %e, "Staging directory left behind after import");
        }

        info!(files = files.len(), "Project imported");
        Ok(ScaffoldReport {
            project_dir: self.scaffold.layout().project_dir(name),
            files,
            registration,
        })
    }

    /// Create `tmp/<name>`.
    pub fn stage_directory(&self, name: &ProjectName) -> ApiscaffResult<StagingArea<'_>> {
        StagingArea::create(
            self.scaffold.filesystem(),
            self.scaffold.layout().staging_dir_for(name),
        )
    }

    /// Run the converter with the staging directory as output.
    pub fn convert(&self, spec_file: &Path, staging: &StagingArea<'_>) -> ApiscaffResult<()> {
        debug!(output = %staging.path().display(), "Running spec converter");
        self.converter.convert(spec_file, staging.path())
    }

    /// Copy the converted `main.tsp` into the project, overwriting.
    pub fn promote_main_artifact(
        &self,
        name: &ProjectName,
        staging: &StagingArea<'_>,
    ) -> ApiscaffResult<PathBuf> {
        let file = ArchetypeArtifact::MainSchema.output_name();
        let from = staging.path().join(file);
        let to = self.scaffold.layout().project_file(name, file);

        self.scaffold.filesystem().copy_file(&from, &to)?;
        debug!(from = %from.display(), to = %to.display(), "Main schema promoted");
        Ok(to)
    }
}
