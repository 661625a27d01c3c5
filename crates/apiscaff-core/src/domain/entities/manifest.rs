//! JSON manifests: the per-project `config.json` and the shared
//! `package.json`.
//!
//! Both wrap a raw JSON object so that fields this tool does not know about
//! survive a read-modify-write cycle untouched.

use serde_json::{Map, Value};

use crate::domain::{
    error::DomainError,
    placeholder::RenderContext,
    text::DEFAULT_VERSION,
    value_objects::ProjectName,
};

/// Artifact base name used when a project manifest has no `filename`.
pub const DEFAULT_FILENAME: &str = "api";

const PROJECT_MANIFEST: &str = "config.json";
const PACKAGE_MANIFEST: &str = "package.json";

fn parse_object(manifest: &str, content: &str) -> Result<Map<String, Value>, DomainError> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| DomainError::InvalidManifest {
            manifest: manifest.into(),
            reason: e.to_string(),
        })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(DomainError::InvalidManifest {
            manifest: manifest.into(),
            reason: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
    }
}

fn to_pretty(manifest: &str, map: &Map<String, Value>) -> Result<String, DomainError> {
    serde_json::to_string_pretty(map).map_err(|e| DomainError::InvalidManifest {
        manifest: manifest.into(),
        reason: e.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Project manifest ──────────────────────────────────────────────────────────

/// Per-project `config.json`: `filename` plus an optional `version`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectManifest {
    fields: Map<String, Value>,
}

impl ProjectManifest {
    pub fn parse(content: &str) -> Result<Self, DomainError> {
        Ok(Self {
            fields: parse_object(PROJECT_MANIFEST, content)?,
        })
    }

    pub fn filename(&self) -> Option<&str> {
        self.fields.get("filename").and_then(Value::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.fields.get("version").and_then(Value::as_str)
    }

    /// Declared version, or [`DEFAULT_VERSION`].
    pub fn resolved_version(&self) -> &str {
        self.version().unwrap_or(DEFAULT_VERSION)
    }

    /// Declared artifact base name, or [`DEFAULT_FILENAME`].
    pub fn resolved_filename(&self) -> &str {
        self.filename().unwrap_or(DEFAULT_FILENAME)
    }

    /// Render placeholders inside `filename`. Every other field, `version`
    /// included, is left as it is.
    pub fn render(mut self, ctx: &RenderContext) -> Result<Self, DomainError> {
        let rendered = match self.fields.get("filename") {
            Some(Value::String(filename)) => ctx.render(filename),
            Some(other) => {
                return Err(DomainError::InvalidManifest {
                    manifest: PROJECT_MANIFEST.into(),
                    reason: format!("'filename' must be a string, found {}", json_kind(other)),
                });
            }
            None => {
                return Err(DomainError::MissingManifestField {
                    manifest: PROJECT_MANIFEST.into(),
                    field: "filename",
                });
            }
        };

        self.fields.insert("filename".into(), Value::String(rendered));
        Ok(self)
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, DomainError> {
        to_pretty(PROJECT_MANIFEST, &self.fields)
    }
}

// ── Build scripts ─────────────────────────────────────────────────────────────

/// Name of the aggregate script that compiles every project.
pub const BUILD_ALL_SCRIPT: &str = "build:all";

/// The package scripts generated for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildScripts {
    compile_key: String,
    entries: Vec<(String, String)>,
}

impl BuildScripts {
    /// Scripts for `name`, with project files under `projects_dir`
    /// (relative to the workspace root, `/`-separated).
    pub fn for_project(name: &ProjectName, projects_dir: &str) -> Self {
        let main = format!("{projects_dir}/{name}/main.tsp");
        let compile_key = format!("compile:{name}");

        let entries = vec![
            (
                compile_key.clone(),
                format!("npm-run-all --parallel compile-yaml:{name} compile-json:{name}"),
            ),
            (
                format!("postcompile:{name}"),
                format!("apiscaff postbuild {name}"),
            ),
            (
                format!("compile-yaml:{name}"),
                format!("tsp compile {main} --config \"./{projects_dir}/{name}/tspconfig-yaml.yaml\""),
            ),
            (
                format!("compile-json:{name}"),
                format!("tsp compile {main} --config \"./{projects_dir}/{name}/tspconfig-json.yaml\""),
            ),
            (
                format!("watch:{name}"),
                format!("tsp compile {main} --watch --emit @typespec/openapi3"),
            ),
        ];

        Self {
            compile_key,
            entries,
        }
    }

    /// Key of the compile entry that `build:all` chains.
    pub fn compile_key(&self) -> &str {
        &self.compile_key
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

// ── Package manifest ──────────────────────────────────────────────────────────

/// Result of registering build scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// `build:all` already chained this project's compile entry before the
    /// registration appended it again.
    pub duplicated_in_build_all: bool,
}

/// The shared `package.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildManifest {
    fields: Map<String, Value>,
}

impl BuildManifest {
    pub fn parse(content: &str) -> Result<Self, DomainError> {
        Ok(Self {
            fields: parse_object(PACKAGE_MANIFEST, content)?,
        })
    }

    pub fn script(&self, key: &str) -> Option<&str> {
        self.fields
            .get("scripts")
            .and_then(Value::as_object)
            .and_then(|scripts| scripts.get(key))
            .and_then(Value::as_str)
    }

    /// Insert the project's scripts and append its compile entry to
    /// `build:all`.
    ///
    /// `build:all` grows by string concatenation, so registering the same
    /// project twice chains its compile entry twice. The returned
    /// [`Registration`] reports when that happens.
    pub fn register(&mut self, scripts: &BuildScripts) -> Result<Registration, DomainError> {
        let scripts_value = self
            .fields
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()));

        let Value::Object(table) = scripts_value else {
            return Err(DomainError::InvalidManifest {
                manifest: PACKAGE_MANIFEST.into(),
                reason: "'scripts' must be an object".into(),
            });
        };

        for (key, command) in scripts.entries() {
            table.insert(key.clone(), Value::String(command.clone()));
        }

        let build_all = match table.get(BUILD_ALL_SCRIPT) {
            None => String::new(),
            Some(Value::String(existing)) => existing.clone(),
            Some(other) => {
                return Err(DomainError::InvalidManifest {
                    manifest: PACKAGE_MANIFEST.into(),
                    reason: format!(
                        "'{BUILD_ALL_SCRIPT}' must be a string, found {}",
                        json_kind(other)
                    ),
                });
            }
        };

        let duplicated_in_build_all = build_all
            .split_whitespace()
            .any(|word| word == scripts.compile_key());

        let chained = if build_all.is_empty() {
            scripts.compile_key().to_owned()
        } else {
            format!("{build_all} {}", scripts.compile_key())
        };
        table.insert(BUILD_ALL_SCRIPT.into(), Value::String(chained));

        Ok(Registration {
            duplicated_in_build_all,
        })
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, DomainError> {
        to_pretty(PACKAGE_MANIFEST, &self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::placeholder::Placeholder;

    fn name(s: &str) -> ProjectName {
        ProjectName::new(s).unwrap()
    }

    // ── ProjectManifest ─────────────────────────────────────────────────────

    #[test]
    fn version_and_filename_resolve_when_present() {
        let m = ProjectManifest::parse(r#"{"filename":"api-orders","version":"1.2.3"}"#).unwrap();
        assert_eq!(m.resolved_version(), "1.2.3");
        assert_eq!(m.resolved_filename(), "api-orders");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let m = ProjectManifest::parse(r#"{"someOtherField":"value"}"#).unwrap();
        assert_eq!(m.resolved_version(), "0.0.0");
        assert_eq!(m.resolved_filename(), "api");

        let empty = ProjectManifest::parse("{}").unwrap();
        assert_eq!(empty.resolved_version(), "0.0.0");
    }

    #[test]
    fn render_substitutes_filename_and_keeps_version() {
        let m = ProjectManifest::parse(
            r#"{"filename":"api-#{PROJECT_NAME}","version":"1.0.0-beta.1"}"#,
        )
        .unwrap();
        let rendered = m
            .render(&RenderContext::for_project(&name("orders")))
            .unwrap();

        assert_eq!(rendered.filename(), Some("api-orders"));
        assert_eq!(rendered.version(), Some("1.0.0-beta.1"));
    }

    #[test]
    fn render_leaves_other_fields_alone() {
        let m = ProjectManifest::parse(
            r##"{"title":"#{PROJECT_NAME}","filename":"#{PROJECT_NAME}"}"##,
        )
        .unwrap();
        let rendered = m
            .render(&RenderContext::new().with(Placeholder::ProjectName, "x"))
            .unwrap();
        let json = rendered.to_pretty_json().unwrap();
        assert!(json.contains(r##""title": "#{PROJECT_NAME}""##));
        assert!(json.contains(r#""filename": "x""#));
    }

    #[test]
    fn render_without_filename_fails() {
        let m = ProjectManifest::parse(r#"{"version":"1.0.0"}"#).unwrap();
        assert!(matches!(
            m.render(&RenderContext::for_project(&name("orders"))),
            Err(DomainError::MissingManifestField {
                field: "filename",
                ..
            })
        ));
    }

    #[test]
    fn non_object_manifest_is_invalid() {
        assert!(matches!(
            ProjectManifest::parse("[1, 2]"),
            Err(DomainError::InvalidManifest { .. })
        ));
        assert!(ProjectManifest::parse("not json").is_err());
    }

    #[test]
    fn pretty_json_uses_two_space_indent() {
        let m = ProjectManifest::parse(r#"{"filename":"api","version":"1.0.0"}"#).unwrap();
        assert_eq!(
            m.to_pretty_json().unwrap(),
            "{\n  \"filename\": \"api\",\n  \"version\": \"1.0.0\"\n}"
        );
    }

    // ── BuildScripts ────────────────────────────────────────────────────────

    #[test]
    fn build_scripts_have_fixed_shape() {
        let scripts = BuildScripts::for_project(&name("orders"), "projects");
        let keys: Vec<&str> = scripts.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "compile:orders",
                "postcompile:orders",
                "compile-yaml:orders",
                "compile-json:orders",
                "watch:orders"
            ]
        );
        assert_eq!(
            scripts.entries()[2].1,
            "tsp compile projects/orders/main.tsp --config \"./projects/orders/tspconfig-yaml.yaml\""
        );
        assert_eq!(scripts.compile_key(), "compile:orders");
    }

    // ── BuildManifest ───────────────────────────────────────────────────────

    #[test]
    fn register_adds_scripts_and_chains_build_all() {
        let mut pkg = BuildManifest::parse(
            r#"{"name":"apis","scripts":{"build:all":"npm-run-all"}}"#,
        )
        .unwrap();
        let outcome = pkg
            .register(&BuildScripts::for_project(&name("orders"), "projects"))
            .unwrap();

        assert!(!outcome.duplicated_in_build_all);
        assert_eq!(pkg.script("build:all"), Some("npm-run-all compile:orders"));
        assert_eq!(
            pkg.script("compile:orders"),
            Some("npm-run-all --parallel compile-yaml:orders compile-json:orders")
        );
        assert_eq!(pkg.script("postcompile:orders"), Some("apiscaff postbuild orders"));
        assert!(pkg.script("watch:orders").is_some());
    }

    #[test]
    fn repeated_registration_duplicates_build_all_entry() {
        let mut pkg =
            BuildManifest::parse(r#"{"scripts":{"build:all":"npm-run-all"}}"#).unwrap();
        let scripts = BuildScripts::for_project(&name("orders"), "projects");

        pkg.register(&scripts).unwrap();
        let second = pkg.register(&scripts).unwrap();

        assert!(second.duplicated_in_build_all);
        assert_eq!(
            pkg.script("build:all"),
            Some("npm-run-all compile:orders compile:orders")
        );
    }

    #[test]
    fn register_creates_missing_scripts_table() {
        let mut pkg = BuildManifest::parse(r#"{"name":"apis"}"#).unwrap();
        pkg.register(&BuildScripts::for_project(&name("orders"), "projects"))
            .unwrap();
        assert_eq!(pkg.script("build:all"), Some("compile:orders"));
    }

    #[test]
    fn register_rejects_non_object_scripts() {
        let mut pkg = BuildManifest::parse(r#"{"scripts":"oops"}"#).unwrap();
        assert!(matches!(
            pkg.register(&BuildScripts::for_project(&name("orders"), "projects")),
            Err(DomainError::InvalidManifest { .. })
        ));
    }

    #[test]
    fn key_order_is_preserved() {
        let mut pkg = BuildManifest::parse(
            r#"{"name":"apis","version":"1.0.0","scripts":{"build:all":"npm-run-all"},"devDependencies":{}}"#,
        )
        .unwrap();
        pkg.register(&BuildScripts::for_project(&name("orders"), "projects"))
            .unwrap();
        let json = pkg.to_pretty_json().unwrap();

        let name_at = json.find("\"name\"").unwrap();
        let version_at = json.find("\"version\"").unwrap();
        let scripts_at = json.find("\"scripts\"").unwrap();
        let dev_at = json.find("\"devDependencies\"").unwrap();
        assert!(name_at < version_at && version_at < scripts_at && scripts_at < dev_at);
    }
}
