//! The archetype: the fixed set of template artifacts every API project is
//! rendered from.

use std::fmt;

/// One template file in the archetype directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchetypeArtifact {
    /// Project manifest (`config.json`), only `filename` is rendered.
    Manifest,
    /// TypeSpec compiler config emitting JSON.
    ToolConfigJson,
    /// TypeSpec compiler config emitting YAML.
    ToolConfigYaml,
    /// Main TypeSpec schema.
    MainSchema,
}

impl ArchetypeArtifact {
    /// All artifacts in render order.
    pub const ALL: [ArchetypeArtifact; 4] = [
        ArchetypeArtifact::Manifest,
        ArchetypeArtifact::ToolConfigJson,
        ArchetypeArtifact::ToolConfigYaml,
        ArchetypeArtifact::MainSchema,
    ];

    pub const TOOL_CONFIGS: [ArchetypeArtifact; 2] = [
        ArchetypeArtifact::ToolConfigJson,
        ArchetypeArtifact::ToolConfigYaml,
    ];

    /// File name inside the archetype directory.
    pub const fn template_name(&self) -> &'static str {
        match self {
            Self::Manifest => "config.json",
            Self::ToolConfigJson => "tspconfig-json",
            Self::ToolConfigYaml => "tspconfig-yaml",
            Self::MainSchema => "main",
        }
    }

    /// File name written into the project directory.
    pub const fn output_name(&self) -> &'static str {
        match self {
            Self::Manifest => "config.json",
            Self::ToolConfigJson => "tspconfig-json.yaml",
            Self::ToolConfigYaml => "tspconfig-yaml.yaml",
            Self::MainSchema => "main.tsp",
        }
    }
}

impl fmt::Display for ArchetypeArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}
