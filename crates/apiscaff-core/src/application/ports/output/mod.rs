//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `apiscaff-adapters` crate provides implementations.

use std::path::Path;

use crate::error::ApiscaffResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `apiscaff_adapters::filesystem::LocalFilesystem` (production)
/// - `apiscaff_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ApiscaffResult<()>;

    /// Read a UTF-8 text file.
    fn read_to_string(&self, path: &Path) -> ApiscaffResult<String>;

    /// Read a file as raw bytes.
    fn read(&self, path: &Path) -> ApiscaffResult<Vec<u8>>;

    /// Write raw bytes, replacing any existing file.
    fn write(&self, path: &Path, content: &[u8]) -> ApiscaffResult<()>;

    /// Write text content, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> ApiscaffResult<()> {
        self.write(path, content.as_bytes())
    }

    /// Copy a file, overwriting the destination.
    fn copy_file(&self, from: &Path, to: &Path) -> ApiscaffResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ApiscaffResult<()>;
}

/// Port for converting an OpenAPI document into TypeSpec sources.
///
/// Implemented by:
/// - `apiscaff_adapters::converter::CommandConverter` (`tsp-openapi3`)
#[cfg_attr(test, mockall::automock)]
pub trait SpecConverter: Send + Sync {
    /// Convert `spec_file`, writing the generated sources into `output_dir`.
    ///
    /// The converter's own success is trusted; its output is not validated.
    fn convert(&self, spec_file: &Path, output_dir: &Path) -> ApiscaffResult<()>;
}
