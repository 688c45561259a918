//! Project skeleton initialisation.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::{ports::Filesystem, services::materializer::Materializer},
    domain::{ProjectLayout, RelativePath},
    error::ArchitectResult,
};

/// Creates the fixed directory skeleton of a new project.
pub struct ProjectService {
    root: PathBuf,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectService {
    pub fn new(root: impl Into<PathBuf>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            root: root.into(),
            filesystem,
        }
    }

    /// Create every skeleton directory with an empty `.gitkeep` inside.
    ///
    /// Safe to run repeatedly: directories are reused and keep files are
    /// rewritten as empty. Returns the keep files written, in order.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    pub fn init_project(&self) -> ArchitectResult<Vec<RelativePath>> {
        let materializer = Materializer::new(&self.root, self.filesystem.as_ref());
        let mut written = Vec::with_capacity(ProjectLayout::SKELETON.len());

        for dir in ProjectLayout::SKELETON {
            let dir = RelativePath::from(dir);
            materializer.ensure_dir(&dir)?;

            let keep = dir.join(ProjectLayout::KEEP_FILE)?;
            materializer.write_file(&keep, "")?;
            written.push(keep);
        }

        info!(directories = written.len(), "Project structure initialised");
        Ok(written)
    }
}
