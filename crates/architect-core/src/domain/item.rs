//! Item kinds and generation requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// The unit of code the engine can generate.
///
/// Adding a kind means adding a variant here; every `match` on `ItemKind`
/// then fails to compile until the new kind is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Component,
    Service,
    Hook,
    Module,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [Self::Component, Self::Module, Self::Service, Self::Hook];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Service => "service",
            Self::Hook => "hook",
            Self::Module => "module",
        }
    }

    /// Whether items of this kind can live inside a feature module.
    pub const fn is_module_scoped(self) -> bool {
        !matches!(self, Self::Module)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = DomainError;

    /// Exact, case-sensitive match on the lowercase kind name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "component" => Ok(Self::Component),
            "service" => Ok(Self::Service),
            "hook" => Ok(Self::Hook),
            "module" => Ok(Self::Module),
            other => Err(DomainError::UnknownItemKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// A validated request to generate one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRequest {
    kind: ItemKind,
    raw_name: String,
    module: Option<String>,
}

impl ItemRequest {
    /// Build a request, rejecting an empty name.
    ///
    /// The module is dropped for [`ItemKind::Module`] (modules do not nest)
    /// and when it is an empty string.
    pub fn new(
        kind: ItemKind,
        raw_name: impl Into<String>,
        module: Option<impl Into<String>>,
    ) -> Result<Self, DomainError> {
        let raw_name = raw_name.into();
        if raw_name.is_empty() {
            return Err(DomainError::EmptyName);
        }

        let module = module
            .map(Into::<String>::into)
            .filter(|m| !m.is_empty() && kind.is_module_scoped());

        Ok(Self {
            kind,
            raw_name,
            module,
        })
    }

    pub const fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }
}

impl fmt::Display for ItemRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.module {
            Some(module) => write!(f, "{} '{}' in module '{}'", self.kind, self.raw_name, module),
            None => write!(f, "{} '{}'", self.kind, self.raw_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_lowercase_names() {
        assert_eq!("component".parse::<ItemKind>().unwrap(), ItemKind::Component);
        assert_eq!("service".parse::<ItemKind>().unwrap(), ItemKind::Service);
        assert_eq!("hook".parse::<ItemKind>().unwrap(), ItemKind::Hook);
        assert_eq!("module".parse::<ItemKind>().unwrap(), ItemKind::Module);
    }

    #[test]
    fn kind_rejects_unknown_and_wrong_case() {
        assert_eq!(
            "bogus".parse::<ItemKind>(),
            Err(DomainError::UnknownItemKind {
                kind: "bogus".into()
            })
        );
        assert!("Component".parse::<ItemKind>().is_err());
        assert!("".parse::<ItemKind>().is_err());
    }

    #[test]
    fn kind_display_roundtrips_through_parse() {
        for kind in ItemKind::ALL {
            assert_eq!(kind.to_string().parse::<ItemKind>().unwrap(), kind);
        }
    }

    #[test]
    fn request_rejects_empty_name() {
        assert_eq!(
            ItemRequest::new(ItemKind::Hook, "", None::<String>),
            Err(DomainError::EmptyName)
        );
    }

    #[test]
    fn module_kind_ignores_module_argument() {
        let req = ItemRequest::new(ItemKind::Module, "reporting", Some("billing")).unwrap();
        assert_eq!(req.module(), None);
    }

    #[test]
    fn empty_module_is_treated_as_absent() {
        let req = ItemRequest::new(ItemKind::Service, "auth", Some("")).unwrap();
        assert_eq!(req.module(), None);
    }

    #[test]
    fn display_mentions_module() {
        let req = ItemRequest::new(ItemKind::Component, "Widget", Some("billing")).unwrap();
        assert_eq!(req.to_string(), "component 'Widget' in module 'billing'");
    }
}
