//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`WorkspaceLayout`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--root`, `--no-color`), applied by [`AppConfig::apply_overrides`]
//! 2. The file passed with `--config`
//! 3. `apiscaff.toml` in the current directory
//! 4. The per-user config file (`directories::ProjectDirs`)
//! 5. Built-in defaults (always present)
//!
//! Only the first file found is read. Keys missing from it fall back to the
//! defaults.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use apiscaff_adapters::DEFAULT_CONVERTER;
use apiscaff_core::domain::WorkspaceLayout;

use crate::cli::global::GlobalArgs;

/// Name of the workspace-local configuration file.
pub const LOCAL_CONFIG_FILE: &str = "apiscaff.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Workspace directory layout.
    pub workspace: WorkspaceConfig,
    /// External OpenAPI converter.
    pub converter: ConverterConfig,
    /// Output settings.
    pub output: OutputConfig,

    /// File this configuration was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub root: PathBuf,
    pub projects_dir: PathBuf,
    pub archetype_dir: PathBuf,
    pub staging_dir: PathBuf,
    pub doc_dir: PathBuf,
    pub dist_dir: PathBuf,
    pub package_manifest: PathBuf,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        let layout = WorkspaceLayout::default();
        Self {
            root: layout.root,
            projects_dir: layout.projects_dir,
            archetype_dir: layout.archetype_dir,
            staging_dir: layout.staging_dir,
            doc_dir: layout.doc_dir,
            dist_dir: layout.dist_dir,
            package_manifest: layout.package_manifest,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Program invoked as `<program> [args...] <spec> --output-dir <dir>`.
    pub program: String,
    /// Leading arguments, e.g. `["tsp-openapi3"]` with `program = "npx"`.
    pub args: Vec<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_CONVERTER.into(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from the first file found in the resolution
    /// order, or the built-in defaults when there is none.
    ///
    /// An explicit `--config` path that does not exist is an error; the
    /// implicit locations are simply skipped.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            anyhow::ensure!(
                path.exists(),
                "configuration file not found: {}",
                path.display()
            );
            return Self::from_file(path);
        }

        for candidate in Self::implicit_paths() {
            debug!(path = %candidate.display(), "checking config candidate");
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Parse one TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut config: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Apply the CLI flags that override file values.
    pub fn apply_overrides(&mut self, args: &GlobalArgs) {
        if let Some(root) = &args.root {
            self.workspace.root = root.clone();
        }
        if args.no_color {
            self.output.no_color = true;
        }
    }

    /// Workspace layout handed to the core services.
    pub fn layout(&self) -> WorkspaceLayout {
        let ws = &self.workspace;
        WorkspaceLayout {
            root: ws.root.clone(),
            projects_dir: ws.projects_dir.clone(),
            archetype_dir: ws.archetype_dir.clone(),
            staging_dir: ws.staging_dir.clone(),
            doc_dir: ws.doc_dir.clone(),
            dist_dir: ws.dist_dir.clone(),
            package_manifest: ws.package_manifest.clone(),
        }
    }

    /// Pretty TOML rendering.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to serialise configuration")
    }

    /// Look up a dotted key such as `workspace.projects_dir`.
    ///
    /// Returns `None` for unknown keys and for keys naming a whole section.
    pub fn get(&self, key: &str) -> Option<String> {
        let mut value = toml::Value::try_from(self).ok()?;
        for part in key.split('.') {
            value = value.get(part)?.clone();
        }
        match value {
            toml::Value::String(s) => Some(s),
            toml::Value::Table(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Path of the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "apiscaff")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// The file `load` would read without `--config`, or where `init`
    /// writes when none exists yet.
    pub fn config_path(&self) -> PathBuf {
        self.source
            .clone()
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    fn implicit_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        paths.extend(Self::user_config_path());
        paths
    }
}
