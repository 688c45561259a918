//! Template identifiers and render contexts.
//!
//! The set of templates is closed: one template per generated file per item
//! kind. Template *syntax* is owned by whichever renderer adapter is plugged
//! in; the core only names templates and supplies string values.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::naming::NamingSet;

/// One of the fixed template resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    ComponentView,
    ComponentStyles,
    ComponentTypes,
    ComponentIndex,
    Service,
    Hook,
    ModuleIndex,
}

impl TemplateId {
    pub const ALL: [TemplateId; 7] = [
        Self::ComponentView,
        Self::ComponentStyles,
        Self::ComponentTypes,
        Self::ComponentIndex,
        Self::Service,
        Self::Hook,
        Self::ModuleIndex,
    ];

    /// File name of the template resource.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::ComponentView => "component.tsx.hbs",
            Self::ComponentStyles => "component.module.scss.hbs",
            Self::ComponentTypes => "component.types.ts.hbs",
            Self::ComponentIndex => "component.index.ts.hbs",
            Self::Service => "service.ts.hbs",
            Self::Hook => "hook.ts.hbs",
            Self::ModuleIndex => "module.index.ts.hbs",
        }
    }

    /// Resource name without the `.hbs` extension, used as the registry key.
    pub fn name(&self) -> &'static str {
        let file = self.file_name();
        file.strip_suffix(".hbs").unwrap_or(file)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Placeholder name → value mapping handed to a render function.
///
/// Serialises as a flat JSON-like object so template engines can consume it
/// directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateContext(BTreeMap<String, String>);

impl TemplateContext {
    pub const NAME: &'static str = "name";
    pub const KEBAB_NAME: &'static str = "kebabName";
    pub const CAMEL_NAME: &'static str = "camelName";
    pub const HOOK_NAME: &'static str = "hookName";

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `{name, kebabName}` for the component files.
    pub fn for_component(names: &NamingSet) -> Self {
        Self::new()
            .with(Self::NAME, &names.pascal)
            .with(Self::KEBAB_NAME, &names.kebab)
    }

    /// `{name, camelName}` for the service file.
    pub fn for_service(names: &NamingSet) -> Self {
        Self::new()
            .with(Self::NAME, &names.pascal)
            .with(Self::CAMEL_NAME, &names.camel)
    }

    /// `{hookName}` for the hook file.
    pub fn for_hook(names: &NamingSet) -> Self {
        Self::new().with(Self::HOOK_NAME, &names.hook_name)
    }

    /// `{name}` for the module barrel.
    pub fn for_module(names: &NamingSet) -> Self {
        Self::new().with(Self::NAME, &names.pascal)
    }
}
