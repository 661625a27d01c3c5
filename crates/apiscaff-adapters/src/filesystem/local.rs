//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use apiscaff_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ApiscaffError, ApiscaffResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> ApiscaffResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn read_to_string(&self, path: &Path) -> ApiscaffResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn read(&self, path: &Path) -> ApiscaffResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write(&self, path: &Path, content: &[u8]) -> ApiscaffResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ApiscaffResult<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy file"))
    }

    fn remove_dir_all(&self, path: &Path) -> ApiscaffResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ApiscaffError {
    if e.kind() == io::ErrorKind::NotFound {
        return ApplicationError::NotFound {
            path: path.to_path_buf(),
        }
        .into();
    }

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
