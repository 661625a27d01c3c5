//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use apiscaff_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ApiscaffError, ApiscaffResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can hand one clone to a service
/// and inspect the other afterwards.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn require_parent(&self, path: &Path) -> ApiscaffResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.directories.contains(parent) => {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        {
            let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_dir_all(parent);
            }
            inner
                .files
                .insert(path.to_path_buf(), content.as_ref().to_vec());
        }
        self
    }

    /// Read a file's content as text (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner
            .files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.files.keys().cloned().collect()
    }

    fn lock_error() -> ApiscaffError {
        ApiscaffError::Internal {
            message: "memory filesystem lock poisoned".into(),
        }
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> ApiscaffResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;
        inner.add_dir_all(path);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> ApiscaffResult<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Failed to read file: {e}"),
            }
            .into()
        })
    }

    fn read(&self, path: &Path) -> ApiscaffResult<Vec<u8>> {
        let inner = self.inner.read().map_err(|_| Self::lock_error())?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::NotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn write(&self, path: &Path, content: &[u8]) -> ApiscaffResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;
        inner.require_parent(path)?;
        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ApiscaffResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;
        let content = inner.files.get(from).cloned().ok_or_else(|| {
            ApiscaffError::from(ApplicationError::NotFound {
                path: from.to_path_buf(),
            })
        })?;
        inner.require_parent(to)?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> ApiscaffResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;
        if !inner.directories.contains(path) {
            return Err(ApplicationError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/b.txt"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/a/b.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn remove_dir_all_drops_descendants() {
        let fs = MemoryFilesystem::new()
            .with_file("/ws/tmp/orders/main.tsp", "x")
            .with_file("/ws/tmp/orders/models/pet.tsp", "y");

        fs.remove_dir_all(Path::new("/ws/tmp/orders")).unwrap();

        assert!(!fs.exists(Path::new("/ws/tmp/orders")));
        assert!(!fs.exists(Path::new("/ws/tmp/orders/models")));
        assert!(fs.list_files().is_empty());
        assert!(fs.exists(Path::new("/ws/tmp")));
    }

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("/ws")).unwrap();
        assert!(other.exists(Path::new("/ws")));
    }

    #[test]
    fn copy_missing_source_is_not_found() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/ws")).unwrap();
        assert!(matches!(
            fs.copy_file(Path::new("/ws/a"), Path::new("/ws/b")),
            Err(ApiscaffError::Application(ApplicationError::NotFound { .. }))
        ));
    }
}
