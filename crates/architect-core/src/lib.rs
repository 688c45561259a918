//! Architect Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! `react-architect` scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         architect-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerationService, ProjectService,    │
//! │   ModuleCatalog)                        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, TemplateRenderer)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   architect-adapters (Infrastructure)   │
//! │ (LocalFilesystem, HandlebarsRenderer)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (NamingSet, ProjectLayout, Plan)        │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use architect_core::application::GenerationService;
//!
//! // Adapters are injected; the core never touches the process cwd.
//! let service = GenerationService::new("./my-app", renderer, filesystem);
//! let report = service.generate_item("component", "user card", None)?;
//! assert_eq!(report.target_dir.to_string(), "src/components/UserCard");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, GenerationReport, GenerationService, ModuleCatalog, ProjectService,
        ports::{Filesystem, RenderFn, TemplateRenderer},
    };
    pub use crate::domain::{
        DomainError, GenerationPlan, ItemKind, ItemRequest, NamingSet, ProjectLayout,
        RelativePath, TemplateContext, TemplateId,
    };
    pub use crate::error::{ArchitectError, ArchitectResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
