//! Infrastructure adapters for Architect.
//!
//! This crate implements the ports defined in `architect-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use builtin_templates::{TemplateSource, resolve_source};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::HandlebarsRenderer;
