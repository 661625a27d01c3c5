//! Implementation of the `apiscaff postbuild` command.
//!
//! Run by the generated `postcompile:<name>` script after `tsp compile`.

use tracing::{info, instrument};

use apiscaff_adapters::LocalFilesystem;
use apiscaff_core::application::PackageService;

use crate::{
    cli::PostbuildArgs,
    commands::{display_name, project_name},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `apiscaff postbuild` command.
///
/// Every failure is reported under "Failed to generate API documentation
/// for project <name>".
#[instrument(skip_all)]
pub fn execute(args: PostbuildArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let summary = format!(
        "Failed to generate API documentation for project {}",
        display_name(args.name.as_ref())
    );
    postbuild(args, &config, &output).map_err(|e| e.context(summary))
}

fn postbuild(args: PostbuildArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let name = project_name(args.name)?;
    let service = PackageService::new(Box::new(LocalFilesystem::new()), config.layout());

    let version = service.resolve_version(&name)?;
    output.print(&format!(
        "Generating API documentation {version} for project {name}..."
    ))?;

    let names = service.resolve_artifact_names(&name)?;
    let published = service.publish(&names, &name, &version)?;

    info!(project = %name, version = %version, files = published.len(), "postbuild finished");
    output.success(&format!(
        "API documentation for {name} generated successfully"
    ))?;
    Ok(())
}
