//! The fixed project layout convention.
//!
//! ```text
//! src/
//! ├── core/{services,hooks,context}
//! ├── components/
//! ├── shared/{ui,utils}
//! └── modules/<module>/{components,services,hooks}
//! ```
//!
//! Nothing records this layout on disk; every write recreates whatever part
//! of it is missing.

use crate::domain::{
    entities::common::RelativePath, error::DomainError, item::ItemKind, naming::NamingSet,
};

/// Path conventions for a generated project.
pub struct ProjectLayout;

impl ProjectLayout {
    /// Directories created by `init`, each receiving a [`Self::KEEP_FILE`].
    pub const SKELETON: [&'static str; 7] = [
        "src/core/services",
        "src/core/hooks",
        "src/core/context",
        "src/components",
        "src/shared/ui",
        "src/shared/utils",
        "src/modules",
    ];

    /// Empty marker file so empty directories survive version control.
    pub const KEEP_FILE: &'static str = ".gitkeep";

    pub const MODULES_DIR: &'static str = "src/modules";

    /// Subdirectories every feature module gets.
    pub const MODULE_SUBDIRS: [&'static str; 3] = ["components", "services", "hooks"];

    /// Barrel file name for components and modules.
    pub const INDEX_FILE: &'static str = "index.ts";

    /// Root directory of a feature module.
    pub fn module_dir(module: &str) -> Result<RelativePath, DomainError> {
        RelativePath::from(Self::MODULES_DIR).join(module)
    }

    /// Directory an item of `kind` is written into.
    ///
    /// `module` is ignored for [`ItemKind::Module`].
    pub fn target_dir(
        kind: ItemKind,
        names: &NamingSet,
        module: Option<&str>,
    ) -> Result<RelativePath, DomainError> {
        match (kind, module) {
            (ItemKind::Component, Some(module)) => Self::module_dir(module)?
                .join("components")?
                .join(&names.pascal),
            (ItemKind::Component, None) => RelativePath::from("src/components").join(&names.pascal),
            (ItemKind::Service, Some(module)) => Self::module_dir(module)?.join("services"),
            (ItemKind::Service, None) => Ok(RelativePath::from("src/core/services")),
            (ItemKind::Hook, Some(module)) => Self::module_dir(module)?.join("hooks"),
            (ItemKind::Hook, None) => Ok(RelativePath::from("src/core/hooks")),
            (ItemKind::Module, _) => Self::module_dir(&names.kebab),
        }
    }
}
