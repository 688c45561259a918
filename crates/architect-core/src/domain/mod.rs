//! Core domain layer for Architect.
//!
//! This module contains pure generation logic with no I/O. Filesystem access
//! and template rendering are reached only through the ports defined in the
//! application layer.
//!
//! ## Contents
//!
//! - **naming**: Pascal/camel/kebab conventions and the derived `NamingSet`
//! - **item**: the closed set of item kinds and validated requests
//! - **template**: template identifiers and render contexts
//! - **entities**: the project layout convention and generation plans
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod item;
pub mod naming;
pub mod template;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    generation_plan::{GeneratedArtifact, GenerationPlan, PlanEntry},
    project_layout::ProjectLayout,
};

pub use error::{DomainError, ErrorCategory};
pub use item::{ItemKind, ItemRequest};
pub use naming::{NamingSet, to_camel_case, to_kebab_case, to_pascal_case};
pub use template::{TemplateContext, TemplateId};
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Request validation
    // ========================================================================

    #[test]
    fn validator_parses_kind_and_builds_request() {
        let req = DomainValidator::validate_request("hook", "fetchData", Some("billing")).unwrap();
        assert_eq!(req.kind(), ItemKind::Hook);
        assert_eq!(req.module(), Some("billing"));
    }

    #[test]
    fn validator_checks_kind_before_name() {
        assert_eq!(
            DomainValidator::validate_request("bogus", "", None),
            Err(DomainError::UnknownItemKind {
                kind: "bogus".into()
            })
        );
    }

    // ========================================================================
    // Layout + naming working together
    // ========================================================================

    #[test]
    fn hook_file_is_named_after_hook_name() {
        let names = NamingSet::derive("use fetch data");
        let dir = ProjectLayout::target_dir(ItemKind::Hook, &names, None).unwrap();
        let file = dir.join(format!("{}.ts", names.hook_name)).unwrap();
        assert_eq!(file.to_string(), "src/core/hooks/useFetchData.ts");
    }

    #[test]
    fn plan_validation_goes_through_validator() {
        let mut plan = GenerationPlan::new(
            ItemKind::Service,
            NamingSet::derive("auth"),
            RelativePath::from("src/core/services"),
        );
        plan.add_directory(RelativePath::from("src/core/services"));
        plan.add_directory(RelativePath::from("src/core/services"));
        assert!(DomainValidator::validate_plan(&plan).is_err());
    }
}
