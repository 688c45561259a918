//! Idempotent directory creation and overwriting file writes, rooted at the
//! project directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{application::ports::Filesystem, domain::RelativePath, error::ArchitectResult};

/// Resolves project-relative paths and writes through the [`Filesystem`] port.
pub struct Materializer<'a> {
    root: &'a Path,
    filesystem: &'a dyn Filesystem,
}

impl<'a> Materializer<'a> {
    pub fn new(root: &'a Path, filesystem: &'a dyn Filesystem) -> Self {
        Self { root, filesystem }
    }

    pub fn resolve(&self, path: &RelativePath) -> PathBuf {
        self.root.join(path)
    }

    /// Create `path` and its parents. An existing directory is not an error.
    pub fn ensure_dir(&self, path: &RelativePath) -> ArchitectResult<()> {
        let full = self.resolve(path);
        debug!(path = %full.display(), "ensure directory");
        self.filesystem.create_dir_all(&full)
    }

    /// Ensure the parent directory, then write `content`, replacing whatever
    /// was at `path`. The old content is never read.
    pub fn write_file(&self, path: &RelativePath, content: &str) -> ArchitectResult<()> {
        match path.parent() {
            Some(parent) => self.ensure_dir(&parent)?,
            None => self.filesystem.create_dir_all(self.root)?,
        }

        let full = self.resolve(path);
        debug!(path = %full.display(), bytes = content.len(), "write file");
        self.filesystem.write_file(&full, content)
    }
}
