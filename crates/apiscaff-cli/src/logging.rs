//! Diagnostic logging for the `apiscaff` binary.
//!
//! The core and adapter crates emit events through `tracing` (service spans,
//! filesystem steps, converter runs). This module installs the one
//! subscriber that prints them, on stderr so that stdout carries only the
//! progress lines a package script may capture.
//!
//! `-q` narrows output to errors and each `-v` widens it by one level,
//! starting from warnings. A set `RUST_LOG` replaces the computed filter.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Library targets whose events are shown at the selected level.
const LOG_TARGETS: [&str; 3] = ["apiscaff", "apiscaff_core", "apiscaff_adapters"];

/// Install the stderr subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(filter_directive(verbosity(args))),
    };

    let events = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(events)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `apiscaff=<level>,apiscaff_core=<level>,...` for every workspace crate.
fn filter_directive(level: LevelFilter) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn verbosity(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
