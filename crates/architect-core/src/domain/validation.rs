use crate::domain::{
    entities::GenerationPlan,
    error::DomainError,
    item::{ItemKind, ItemRequest},
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    /// Re-validate an untrusted kind string and build a request from it.
    pub fn validate_request(
        kind: &str,
        raw_name: &str,
        module: Option<&str>,
    ) -> Result<ItemRequest, DomainError> {
        let kind: ItemKind = kind.parse()?;
        ItemRequest::new(kind, raw_name, module)
    }

    pub fn validate_plan(plan: &GenerationPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
