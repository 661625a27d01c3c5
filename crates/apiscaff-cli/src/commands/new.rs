//! Implementation of the `apiscaff new` command.
//!
//! Responsibility: validate the project name, call the core scaffold
//! service, and display results.

use tracing::{info, instrument};

use apiscaff_adapters::LocalFilesystem;
use apiscaff_core::application::ScaffoldService;

use crate::{
    cli::NewArgs,
    commands::{display_name, project_name},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `apiscaff new` command.
///
/// Every failure is reported under "Failed to create API project <name>".
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let summary = format!(
        "Failed to create API project {}",
        display_name(args.name.as_ref())
    );
    create(args, &config, &output).map_err(|e| e.context(summary))
}

fn create(args: NewArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let name = project_name(args.name)?;
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), config.layout());

    service.ensure_absent(&name)?;
    output.print(&format!("Creating new API project {name}..."))?;

    let report = service.create_project(&name)?;
    if report.registration.duplicated_in_build_all {
        output.warning(&format!("build:all already listed compile:{name}"))?;
    }

    info!(project = %name, dir = %report.project_dir.display(), "new finished");
    output.success(&format!("Successfully created new API project {name}"))?;
    Ok(())
}
