// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::item::ItemKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Unknown item kind: {kind}")]
    UnknownItemKind { kind: String },

    #[error("Item name cannot be empty")]
    EmptyName,

    // ========================================================================
    // Plan invariants
    // ========================================================================
    #[error("Duplicate path in generation plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownItemKind { kind } => vec![
                format!("'{}' is not something that can be generated", kind),
                format!(
                    "Valid types: {}",
                    ItemKind::ALL
                        .iter()
                        .map(ItemKind::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ],
            Self::EmptyName => vec!["Provide a name, e.g. UserCard or fetch-data".into()],
            _ => vec!["This is likely a bug in the generator, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownItemKind { .. } | Self::EmptyName => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_lists_valid_types() {
        let err = DomainError::UnknownItemKind {
            kind: "bogus".into(),
        };
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("component, module, service, hook"))
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn plan_errors_are_internal() {
        let err = DomainError::DuplicatePath {
            path: "src/index.ts".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
