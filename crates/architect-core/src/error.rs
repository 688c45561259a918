//! Unified error handling for Architect Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Architect Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArchitectError {
    /// Errors from the domain layer (invalid requests, plan invariants).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (templates, filesystem).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ArchitectError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Template,
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type ArchitectResult<T> = Result<T, ArchitectError>;
