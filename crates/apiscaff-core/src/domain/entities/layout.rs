//! Where everything lives inside an API workspace.

use std::path::{Path, PathBuf};

use crate::domain::{entities::archetype::ArchetypeArtifact, value_objects::ProjectName};

/// Directory layout of the API workspace.
///
/// All sub-directories are relative to `root`. The defaults mirror the
/// conventional repository layout:
///
/// ```text
/// <root>/
/// ├── package.json
/// ├── projects/<name>/        rendered projects
/// ├── tools/api-archetype/    archetype templates
/// ├── tmp/<name>/             import staging
/// ├── doc/api-<name>/         compiler output
/// └── dist/api-<name>/        versioned artifacts
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    pub root: PathBuf,
    pub projects_dir: PathBuf,
    pub archetype_dir: PathBuf,
    pub staging_dir: PathBuf,
    pub doc_dir: PathBuf,
    pub dist_dir: PathBuf,
    pub package_manifest: PathBuf,
}

impl Default for WorkspaceLayout {
    fn default() -> Self {
        Self::new(".")
    }
}

impl WorkspaceLayout {
    /// Conventional layout below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            projects_dir: PathBuf::from("projects"),
            archetype_dir: PathBuf::from("tools").join("api-archetype"),
            staging_dir: PathBuf::from("tmp"),
            doc_dir: PathBuf::from("doc"),
            dist_dir: PathBuf::from("dist"),
            package_manifest: PathBuf::from("package.json"),
        }
    }

    pub fn project_dir(&self, name: &ProjectName) -> PathBuf {
        self.root.join(&self.projects_dir).join(name.as_path())
    }

    pub fn project_file(&self, name: &ProjectName, file: &str) -> PathBuf {
        self.project_dir(name).join(file)
    }

    pub fn archetype_file(&self, artifact: ArchetypeArtifact) -> PathBuf {
        self.root
            .join(&self.archetype_dir)
            .join(artifact.template_name())
    }

    pub fn staging_dir_for(&self, name: &ProjectName) -> PathBuf {
        self.root.join(&self.staging_dir).join(name.as_path())
    }

    /// Compiler output for a project: `doc/api-<name>`.
    pub fn doc_dir_for(&self, name: &ProjectName) -> PathBuf {
        self.root.join(&self.doc_dir).join(api_dir_name(name))
    }

    /// Distribution output for a project: `dist/api-<name>`.
    pub fn dist_dir_for(&self, name: &ProjectName) -> PathBuf {
        self.root.join(&self.dist_dir).join(api_dir_name(name))
    }

    pub fn package_manifest_path(&self) -> PathBuf {
        self.root.join(&self.package_manifest)
    }

    /// Projects directory as it appears in package scripts, which run from
    /// the workspace root and always use `/`.
    pub fn projects_dir_for_scripts(&self) -> String {
        slash_path(&self.projects_dir)
    }

    /// Compiler output directory as written into tool configs, relative to
    /// the workspace root.
    pub fn doc_dir_for_scripts(&self) -> String {
        slash_path(&self.doc_dir)
    }
}

fn api_dir_name(name: &ProjectName) -> String {
    format!("api-{name}")
}

fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
