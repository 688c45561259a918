//! Local filesystem adapter using std::fs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use architect_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ArchitectResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ArchitectResult<()> {
        if path.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(path).map_err(|e| dir_create_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> ArchitectResult<()> {
        fs::write(path, content).map_err(|e| {
            ApplicationError::FileWrite {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn list_subdirectories(&self, path: &Path) -> ArchitectResult<Vec<String>> {
        let read_error = |e: io::Error| ApplicationError::DirectoryRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(path).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            if entry.file_type().map_err(read_error)?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }
}

fn dir_create_error(path: &Path, e: io::Error) -> architect_core::error::ArchitectError {
    // std reports "file exists" or "not a directory" when a file sits on the path
    let reason = match first_file_ancestor(path) {
        Some(file) => format!("{} is a file", file.display()),
        None => e.to_string(),
    };
    ApplicationError::DirectoryCreate {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

fn first_file_ancestor(path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .find(|p| p.is_file())
        .map(Path::to_path_buf)
}
