//! Read-only view of the feature modules already present in a project.

use std::path::PathBuf;

use tracing::debug;

use crate::{application::ports::Filesystem, domain::ProjectLayout};

/// Lists feature modules under `src/modules`.
pub struct ModuleCatalog {
    root: PathBuf,
    filesystem: Box<dyn Filesystem>,
}

impl ModuleCatalog {
    pub fn new(root: impl Into<PathBuf>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            root: root.into(),
            filesystem,
        }
    }

    /// Names of the direct subdirectories of `src/modules`, sorted.
    ///
    /// Never fails. A missing or unreadable directory yields an empty list.
    pub fn list_modules(&self) -> Vec<String> {
        let dir = self.root.join(ProjectLayout::MODULES_DIR);

        match self.filesystem.list_subdirectories(&dir) {
            Ok(mut names) => {
                names.sort();
                names
            }
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "No modules found");
                Vec::new()
            }
        }
    }
}
