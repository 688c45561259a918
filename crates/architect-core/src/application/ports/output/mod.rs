//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `architect-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{TemplateContext, TemplateId};
use crate::error::ArchitectResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `architect_adapters::filesystem::LocalFilesystem` (production)
/// - `architect_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths handed to the port are already joined onto the project root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Succeeds if the directory already exists; fails with
    /// `ApplicationError::DirectoryCreate` otherwise (including when a file
    /// occupies the path).
    fn create_dir_all(&self, path: &Path) -> ArchitectResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ArchitectResult<()>;

    /// Names of the direct subdirectories of `path`. Files are skipped.
    fn list_subdirectories(&self, path: &Path) -> ArchitectResult<Vec<String>>;
}

/// A compiled template, ready to render a context into text.
pub type RenderFn = Box<dyn Fn(&TemplateContext) -> ArchitectResult<String> + Send + Sync>;

/// Port for template rendering.
///
/// Implemented by:
/// - `architect_adapters::renderer::HandlebarsRenderer`
pub trait TemplateRenderer: Send + Sync {
    /// Load and compile one template resource.
    ///
    /// Fails with `ApplicationError::TemplateNotFound` if the resource does
    /// not exist.
    fn load(&self, id: TemplateId) -> ArchitectResult<RenderFn>;
}
