//! Subprocess spec converter.
//!
//! Runs `<program> [args...] <spec-file> --output-dir <dir>` and trusts its
//! exit status. The program is invoked directly, never through a shell, so
//! a launcher such as `npx` goes in `program` with the tool as an argument.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument, trace};

use apiscaff_core::{
    application::{ApplicationError, ports::SpecConverter},
    error::ApiscaffResult,
};

/// Default OpenAPI to TypeSpec converter.
pub const DEFAULT_CONVERTER: &str = "tsp-openapi3";

/// [`SpecConverter`] backed by an external command.
#[derive(Debug, Clone)]
pub struct CommandConverter {
    program: String,
    args: Vec<String>,
}

impl CommandConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Arguments placed before the spec file, e.g. `tsp-openapi3` for
    /// `npx tsp-openapi3`.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program and leading arguments as one line, for messages.
    fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn command_failed(&self, reason: impl Into<String>) -> ApplicationError {
        ApplicationError::ExternalCommand {
            command: self.display(),
            reason: reason.into(),
        }
    }
}

impl Default for CommandConverter {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER)
    }
}

impl SpecConverter for CommandConverter {
    #[instrument(skip(self), fields(command = %self.display()))]
    fn convert(&self, spec_file: &Path, output_dir: &Path) -> ApiscaffResult<()> {
        debug!("Spawning converter");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(spec_file)
            .arg("--output-dir")
            .arg(output_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.command_failed(e.to_string()))?;

        trace!(stdout = %String::from_utf8_lossy(&output.stdout), "Converter output");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let reason = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                format!("exited with {}: {}", output.status, stderr)
            };
            return Err(self.command_failed(reason).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiscaff_core::error::ApiscaffError;

    #[test]
    fn defaults_to_tsp_openapi3() {
        assert_eq!(CommandConverter::default().program(), "tsp-openapi3");
    }

    #[test]
    fn missing_program_is_external_command_error() {
        let converter = CommandConverter::new("apiscaff-no-such-converter");
        let err = converter
            .convert(Path::new("api.yaml"), Path::new("out"))
            .unwrap_err();

        match err {
            ApiscaffError::Application(ApplicationError::ExternalCommand { command, .. }) => {
                assert_eq!(command, "apiscaff-no-such-converter");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported() {
        // `false` ignores its arguments and exits 1.
        let err = CommandConverter::new("false")
            .convert(Path::new("api.yaml"), Path::new("out"))
            .unwrap_err();
        assert!(err.to_string().contains("External command 'false' failed"));
    }

    #[cfg(unix)]
    #[test]
    fn launcher_args_precede_spec_file() {
        // `env true api.yaml --output-dir out` runs `true`, which exits 0.
        let converter = CommandConverter::new("env").with_args(["true"]);
        assert_eq!(converter.args(), ["true"]);
        converter
            .convert(Path::new("api.yaml"), Path::new("out"))
            .unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn failure_names_full_command() {
        let err = CommandConverter::new("env")
            .with_args(["false"])
            .convert(Path::new("api.yaml"), Path::new("out"))
            .unwrap_err();
        assert!(err.to_string().contains("External command 'env false' failed"));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_trusted() {
        CommandConverter::new("true")
            .convert(Path::new("api.yaml"), Path::new("out"))
            .unwrap();
    }
}
