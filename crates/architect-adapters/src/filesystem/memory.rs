//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use architect_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ArchitectResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and inspect
/// the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    writes: usize,
    fail_after_writes: Option<usize>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `n` file writes succeed, then fail every later one with
    /// `FileWrite`.
    pub fn fail_after_writes(self, n: usize) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.fail_after_writes = Some(n);
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ArchitectResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::FilesystemLock)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if matches!(component, Component::RootDir | Component::Prefix(_)) {
                continue;
            }
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::DirectoryCreate {
                    path: path.to_path_buf(),
                    reason: format!("{} is a file", current.display()),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ArchitectResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::FilesystemLock)?;

        let write_error = |reason: &str| ApplicationError::FileWrite {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        if inner.fail_after_writes.is_some_and(|n| inner.writes >= n) {
            return Err(write_error("injected failure").into());
        }
        if inner.directories.contains(path) {
            return Err(write_error("is a directory").into());
        }
        if let Some(parent) = path.parent() {
            let has_parent = parent.as_os_str().is_empty()
                || parent.parent().is_none()
                || inner.directories.contains(parent);
            if !has_parent {
                return Err(write_error("parent directory does not exist").into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn list_subdirectories(&self, path: &Path) -> ArchitectResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::FilesystemLock)?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::DirectoryRead {
                path: path.to_path_buf(),
                reason: "no such directory".into(),
            }
            .into());
        }

        Ok(inner
            .directories
            .iter()
            .filter(|d| d.parent() == Some(path))
            .filter_map(|d| d.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }
}
