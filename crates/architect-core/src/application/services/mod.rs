//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use cases: "generate an item", "initialise a project" and
//! "list feature modules".

pub mod catalog_service;
pub mod generation_service;
pub mod materializer;
pub mod project_service;

pub use catalog_service::ModuleCatalog;
pub use generation_service::{GenerationReport, GenerationService};
pub use materializer::Materializer;
pub use project_service::ProjectService;
