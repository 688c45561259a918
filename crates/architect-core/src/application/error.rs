//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not naming or
//! layout rules. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateId;
use crate::error::ErrorCategory;

/// Errors that occur while rendering and materializing items.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The template resource does not exist.
    #[error("Template not found: {id}")]
    TemplateNotFound { id: TemplateId },

    /// Template compilation or rendering failed.
    #[error("Failed to render template {id}: {reason}")]
    RenderingFailed { id: TemplateId, reason: String },

    /// A directory could not be created (anything other than "already exists").
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreate { path: PathBuf, reason: String },

    /// A file could not be written.
    #[error("Failed to write file {path}: {reason}")]
    FileWrite { path: PathBuf, reason: String },

    /// A directory could not be listed.
    #[error("Failed to read directory {path}: {reason}")]
    DirectoryRead { path: PathBuf, reason: String },

    /// In-memory filesystem lock poisoned.
    #[error("Filesystem lock poisoned")]
    FilesystemLock,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { id } => vec![
                format!("Missing template file: {}", id.file_name()),
                "Check the directory passed with --templates or ARCHITECT_TEMPLATES_DIR".into(),
                "Remove the override to use the built-in templates".into(),
            ],
            Self::RenderingFailed { id, .. } => vec![
                format!("Template {} references a variable that is not provided", id),
                "Available variables: name, kebabName, camelName, hookName (per item type)".into(),
            ],
            Self::DirectoryCreate { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no file exists where a directory is expected".into(),
            ],
            Self::FileWrite { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before this one were kept; re-run after fixing the cause".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Template,
            Self::DirectoryCreate { .. } | Self::FileWrite { .. } | Self::DirectoryRead { .. } => {
                ErrorCategory::Filesystem
            }
            Self::FilesystemLock => ErrorCategory::Internal,
        }
    }
}
