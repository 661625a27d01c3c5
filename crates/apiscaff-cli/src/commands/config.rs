//! `apiscaff config`: inspect the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.data(&get_config_value(&config, &key)?)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = config
                .to_toml()
                .with_cli_context(|| "Failed to serialise config")?;
            output.data(&serialised)?;
        }

        ConfigCommands::Path => match &config.source {
            Some(path) => output.data(&path.display().to_string())?,
            None => {
                output.data(&config.config_path().display().to_string())?;
                output.info("No configuration file found; using built-in defaults")?;
            }
        },
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
