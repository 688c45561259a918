pub mod common;
pub mod generation_plan;
pub mod project_layout;

pub use crate::domain::DomainError;
pub use generation_plan::GenerationPlan;
pub use project_layout::ProjectLayout;
