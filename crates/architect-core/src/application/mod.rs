//! Application layer for Architect.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService, ProjectService, ModuleCatalog)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or layout rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerationReport, GenerationService, ModuleCatalog, ProjectService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, RenderFn, TemplateRenderer};

pub use error::ApplicationError;
