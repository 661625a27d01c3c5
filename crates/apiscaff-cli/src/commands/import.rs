//! Implementation of the `apiscaff import` command.

use tracing::{info, instrument};

use apiscaff_adapters::{CommandConverter, LocalFilesystem};
use apiscaff_core::application::{ImportService, ScaffoldService};

use crate::{
    cli::ImportArgs,
    commands::{display_name, project_name, spec_file},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `apiscaff import` command.
///
/// Every failure is reported under "Failed to create API project <name>".
#[instrument(skip_all)]
pub fn execute(args: ImportArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let summary = format!(
        "Failed to create API project {}",
        display_name(args.name.as_ref())
    );
    import(args, &config, &output).map_err(|e| e.context(summary))
}

fn import(args: ImportArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let name = project_name(args.name)?;
    let spec = spec_file(args.spec)?;

    let scaffold = ScaffoldService::new(Box::new(LocalFilesystem::new()), config.layout());
    scaffold.ensure_absent(&name)?;

    let converter = CommandConverter::new(config.converter.program.clone())
        .with_args(config.converter.args.iter().cloned());
    let service = ImportService::new(scaffold, Box::new(converter));

    output.print(&format!(
        "Importing API from {} to {name}...",
        spec.display()
    ))?;

    let spinner = output.spinner(&format!("Converting {}", spec.display()));
    let result = service.import_project(&name, &spec);
    spinner.finish_and_clear();
    let report = result?;

    if report.registration.duplicated_in_build_all {
        output.warning(&format!("build:all already listed compile:{name}"))?;
    }

    info!(project = %name, dir = %report.project_dir.display(), "import finished");
    output.success(&format!(
        "Successfully created new API project {name} from {}",
        spec.display()
    ))?;
    Ok(())
}
