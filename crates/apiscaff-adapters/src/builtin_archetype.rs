//! Built-in default archetype.
//!
//! The archetype normally lives in the workspace under
//! `tools/api-archetype/`. `apiscaff init` seeds that directory from the
//! files below so a fresh workspace can create projects straight away.
//! Once seeded, the files on disk are the source of truth and may be edited
//! freely.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use apiscaff_core::{
    application::ports::Filesystem,
    domain::{ArchetypeArtifact, WorkspaceLayout},
    error::ApiscaffResult,
};

const MANIFEST: &str = r##"{
  "filename": "api-#{PROJECT_NAME}",
  "version": "0.1.0"
}
"##;

const MAIN_SCHEMA: &str = r##"import "@typespec/http";
import "@typespec/openapi";

using TypeSpec.Http;

@service(#{
  title: "#{PROJECT_NAME}",
})
namespace #{PROJECT_NAMESPACE};

model Status {
  status: string;
}

@route("/status")
op getStatus(): Status;
"##;

const TOOL_CONFIG_JSON: &str = r##"emit:
  - "@typespec/openapi3"
options:
  "@typespec/openapi3":
    emitter-output-dir: "{cwd}/doc/api-#{PROJECT_NAME}"
    output-file: "api-#{PROJECT_NAME}-x.y.z.json"
    file-type: json
"##;

const TOOL_CONFIG_YAML: &str = r##"emit:
  - "@typespec/openapi3"
options:
  "@typespec/openapi3":
    emitter-output-dir: "{cwd}/doc/api-#{PROJECT_NAME}"
    output-file: "api-#{PROJECT_NAME}-x.y.z.yaml"
    file-type: yaml
"##;

/// Starting `package.json` for a workspace that has none.
const PACKAGE_MANIFEST: &str = r#"{
  "name": "api-workspace",
  "private": true,
  "scripts": {}
}
"#;

/// Compiler output root used by the built-in tool configs. Package scripts
/// run from the workspace root, so `{cwd}` is that root.
const DEFAULT_DOC_ROOT: &str = "{cwd}/doc/";

/// Template content of a built-in archetype artifact.
pub fn template(artifact: ArchetypeArtifact) -> &'static str {
    match artifact {
        ArchetypeArtifact::Manifest => MANIFEST,
        ArchetypeArtifact::MainSchema => MAIN_SCHEMA,
        ArchetypeArtifact::ToolConfigJson => TOOL_CONFIG_JSON,
        ArchetypeArtifact::ToolConfigYaml => TOOL_CONFIG_YAML,
    }
}

/// Template content with the compiler output directory pointed at the
/// layout's `doc_dir`.
pub fn template_for(artifact: ArchetypeArtifact, layout: &WorkspaceLayout) -> String {
    let doc_root = format!("{{cwd}}/{}/", layout.doc_dir_for_scripts());
    template(artifact).replace(DEFAULT_DOC_ROOT, &doc_root)
}

/// Files written by [`seed`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Write the built-in archetype into the workspace.
///
/// Existing archetype files are kept unless `force` is set. A missing
/// `package.json` is created with an empty `scripts` table; an existing one
/// is never touched.
#[instrument(skip_all, fields(root = %layout.root.display(), force))]
pub fn seed(
    filesystem: &dyn Filesystem,
    layout: &WorkspaceLayout,
    force: bool,
) -> ApiscaffResult<SeedReport> {
    let mut report = SeedReport::default();

    filesystem.create_dir_all(&layout.root.join(&layout.archetype_dir))?;
    for artifact in ArchetypeArtifact::ALL {
        let path = layout.archetype_file(artifact);
        let content = template_for(artifact, layout);
        write_unless_present(filesystem, path, &content, force, &mut report)?;
    }

    let package = layout.package_manifest_path();
    if let Some(parent) = package.parent() {
        filesystem.create_dir_all(parent)?;
    }
    write_unless_present(filesystem, package, PACKAGE_MANIFEST, false, &mut report)?;

    info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        "Archetype seeded"
    );
    Ok(report)
}

fn write_unless_present(
    filesystem: &dyn Filesystem,
    path: PathBuf,
    content: &str,
    force: bool,
    report: &mut SeedReport,
) -> ApiscaffResult<()> {
    if filesystem.exists(&path) && !force {
        debug!(path = %path.display(), "Keeping existing file");
        report.skipped.push(path);
        return Ok(());
    }

    filesystem.write_file(&path, content)?;
    debug!(path = %path.display(), "File written");
    report.written.push(path);
    Ok(())
}
