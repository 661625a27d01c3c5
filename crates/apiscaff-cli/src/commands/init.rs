//! `apiscaff init`: write `apiscaff.toml` and seed the archetype directory.

use tracing::instrument;

use apiscaff_adapters::{LocalFilesystem, builtin_archetype};

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Initialise the workspace at the configured root.
///
/// Existing files are kept unless `--force` is given; `package.json` is
/// only ever created, never overwritten.
#[instrument(skip_all, fields(force = args.force))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let layout = config.layout();
    output.info(&format!(
        "Initialising workspace at {}...",
        layout.root.display()
    ))?;

    std::fs::create_dir_all(&layout.root)
        .with_cli_context(|| format!("Failed to create '{}'", layout.root.display()))?;

    let config_path = layout.root.join(LOCAL_CONFIG_FILE);
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
    } else {
        let toml = AppConfig::default()
            .to_toml()
            .with_cli_context(|| "Failed to serialise default config")?;
        std::fs::write(&config_path, toml)
            .with_cli_context(|| format!("Failed to write '{}'", config_path.display()))?;
        output.success(&format!("Configuration created at {}", config_path.display()))?;
    }

    let report = builtin_archetype::seed(&LocalFilesystem::new(), &layout, args.force)?;
    for path in &report.written {
        output.success(&format!("Created {}", path.display()))?;
    }
    for path in &report.skipped {
        output.print(&format!("  kept {}", path.display()))?;
    }

    Ok(())
}
