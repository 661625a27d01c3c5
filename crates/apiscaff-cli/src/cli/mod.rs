//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.
//!
//! Project and file arguments are optional at the clap level so that a
//! missing one is reported through the same failure path as every other
//! error ("Failed to create API project ...").

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "apiscaff",
    bin_name = "apiscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold, import and package TypeSpec API projects",
    long_about = "apiscaff manages a workspace of TypeSpec API projects: it \
                  creates projects from an archetype, imports existing \
                  OpenAPI documents, and publishes versioned build artifacts.",
    after_help = "EXAMPLES:\n\
        \x20 apiscaff new orders\n\
        \x20 apiscaff import pets ./specs/petstore.yaml\n\
        \x20 apiscaff postbuild orders\n\
        \x20 apiscaff completions bash > /usr/share/bash-completion/completions/apiscaff",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new API project from the archetype.
    #[command(
        visible_alias = "n",
        about = "Create a new API project",
        after_help = "EXAMPLES:\n\
            \x20 apiscaff new orders\n\
            \x20 apiscaff new hello-world --root ./apis"
    )]
    New(NewArgs),

    /// Create a new API project from an OpenAPI document.
    #[command(
        visible_alias = "i",
        about = "Import an OpenAPI document as a new API project",
        after_help = "EXAMPLES:\n\
            \x20 apiscaff import pets ./specs/petstore.yaml"
    )]
    Import(ImportArgs),

    /// Publish compiled artifacts under versioned names.
    #[command(
        about = "Copy compiled artifacts into dist/ with the project version",
        after_help = "EXAMPLES:\n\
            \x20 apiscaff postbuild orders\n\n\
            Normally run by the generated `postcompile:<name>` package script."
    )]
    Postbuild(PostbuildArgs),

    /// Initialise an apiscaff workspace.
    #[command(
        about = "Write apiscaff.toml and seed the archetype directory",
        after_help = "EXAMPLES:\n\
            \x20 apiscaff init\n\
            \x20 apiscaff init --force  # restore the built-in archetype"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 apiscaff completions bash > ~/.local/share/bash-completion/completions/apiscaff\n\
            \x20 apiscaff completions zsh  > ~/.zfunc/_apiscaff\n\
            \x20 apiscaff completions fish > ~/.config/fish/completions/apiscaff.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 apiscaff config get converter.program\n\
            \x20 apiscaff config list\n\
            \x20 apiscaff config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `apiscaff new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name, created under the projects directory.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,
}

// ── import ────────────────────────────────────────────────────────────────────

/// Arguments for `apiscaff import`.
#[derive(Debug, Args)]
pub struct ImportArgs {
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// OpenAPI 3 document handed to the converter.
    #[arg(value_name = "SPEC_FILE", help = "Path to the OpenAPI document")]
    pub spec: Option<PathBuf>,
}

// ── postbuild ─────────────────────────────────────────────────────────────────

/// Arguments for `apiscaff postbuild`.
#[derive(Debug, Args)]
pub struct PostbuildArgs {
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `apiscaff init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite existing config and archetype files.
    #[arg(
        short = 'f',
        long = "force",
        help = "Overwrite existing configuration and archetype files"
    )]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `apiscaff completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `apiscaff config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `workspace.projects_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path of the configuration file in use.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
