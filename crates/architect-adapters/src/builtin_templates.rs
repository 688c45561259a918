//! Built-in templates and template source discovery.
//!
//! The seven bundled templates are compiled into the binary with
//! `include_str!`, so a fresh install works without any files on disk.
//! A directory of `.hbs` files can replace them wholesale.
//!
//! # Template resolution order
//!
//! 1. **Explicit directory** from `--templates` or `templates.local_path`.
//! 2. **`$ARCHITECT_TEMPLATES_DIR`** environment variable.
//! 3. **Embedded** templates.
//!
//! A directory source must contain every template file it is asked for;
//! there is no per-file fallback to the embedded set.
//!
//! ```env
//! ARCHITECT_TEMPLATES_DIR=./my-templates
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use architect_core::domain::TemplateId;

/// Environment variable naming a template override directory.
pub const TEMPLATES_DIR_ENV: &str = "ARCHITECT_TEMPLATES_DIR";

/// Where template text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary.
    Embedded,
    /// `<dir>/<template file name>`, read on every load.
    Directory(PathBuf),
}

impl TemplateSource {
    pub fn describe(&self) -> String {
        match self {
            Self::Embedded => "built-in".to_string(),
            Self::Directory(dir) => dir.display().to_string(),
        }
    }
}

/// Text of an embedded template.
pub fn embedded(id: TemplateId) -> &'static str {
    match id {
        TemplateId::ComponentView => include_str!("../templates/component.tsx.hbs"),
        TemplateId::ComponentStyles => include_str!("../templates/component.module.scss.hbs"),
        TemplateId::ComponentTypes => include_str!("../templates/component.types.ts.hbs"),
        TemplateId::ComponentIndex => include_str!("../templates/component.index.ts.hbs"),
        TemplateId::Service => include_str!("../templates/service.ts.hbs"),
        TemplateId::Hook => include_str!("../templates/hook.ts.hbs"),
        TemplateId::ModuleIndex => include_str!("../templates/module.index.ts.hbs"),
    }
}

/// Pick a template source using the resolution order in the module docs.
#[instrument]
pub fn resolve_source(explicit: Option<&Path>) -> TemplateSource {
    resolve_source_with(explicit, std::env::var(TEMPLATES_DIR_ENV).ok())
}

/// [`resolve_source`] with the environment value passed in.
pub fn resolve_source_with(explicit: Option<&Path>, env_dir: Option<String>) -> TemplateSource {
    if let Some(dir) = explicit {
        debug!(path = %dir.display(), "templates from explicit directory");
        return TemplateSource::Directory(dir.to_path_buf());
    }

    if let Some(dir) = env_dir.filter(|d| !d.trim().is_empty()) {
        debug!(path = %dir, "templates from ${}", TEMPLATES_DIR_ENV);
        return TemplateSource::Directory(PathBuf::from(dir));
    }

    debug!("using embedded templates");
    TemplateSource::Embedded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_is_embedded_and_non_empty() {
        for id in TemplateId::ALL {
            assert!(!embedded(id).trim().is_empty(), "{id} is empty");
        }
    }

    #[test]
    fn component_templates_reference_name() {
        for id in [
            TemplateId::ComponentView,
            TemplateId::ComponentTypes,
            TemplateId::ComponentIndex,
        ] {
            assert!(embedded(id).contains("{{name}}"), "{id}");
        }
        assert!(embedded(TemplateId::ComponentView).contains("{{kebabName}}"));
    }

    #[test]
    fn service_and_hook_use_their_variables() {
        assert!(embedded(TemplateId::Service).contains("{{camelName}}"));
        assert!(embedded(TemplateId::Hook).contains("{{hookName}}"));
        assert!(!embedded(TemplateId::Hook).contains("{{name}}"));
    }

    #[test]
    fn explicit_directory_wins() {
        let src = resolve_source_with(Some(Path::new("/a")), Some("/b".into()));
        assert_eq!(src, TemplateSource::Directory(PathBuf::from("/a")));
    }

    #[test]
    fn env_directory_beats_embedded() {
        let src = resolve_source_with(None, Some("/b".into()));
        assert_eq!(src, TemplateSource::Directory(PathBuf::from("/b")));
    }

    #[test]
    fn blank_env_falls_back_to_embedded() {
        assert_eq!(resolve_source_with(None, Some("  ".into())), TemplateSource::Embedded);
        assert_eq!(resolve_source_with(None, None), TemplateSource::Embedded);
    }
}
