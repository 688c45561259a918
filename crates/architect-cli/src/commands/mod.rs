//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core service calls and print the
//! results. No naming or layout rules live here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list_modules;
pub mod module;

use std::path::PathBuf;

use tracing::debug;

use architect_adapters::{HandlebarsRenderer, LocalFilesystem, TemplateSource, resolve_source};
use architect_core::application::{GenerationService, ModuleCatalog, ProjectService};

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

/// Project root and template source shared by every project command.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub templates: TemplateSource,
}

impl Workspace {
    /// `--root` or the current directory; `--templates`, then
    /// `templates.local_path` (relative to the root), then the environment.
    pub fn resolve(global: &GlobalArgs, config: &AppConfig) -> CliResult<Self> {
        let root = match &global.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };

        let explicit = global
            .templates
            .clone()
            .or_else(|| config.templates.local_path.as_ref().map(|p| root.join(p)));
        let templates = resolve_source(explicit.as_deref());

        debug!(root = %root.display(), templates = %templates.describe(), "Workspace resolved");
        Ok(Self { root, templates })
    }

    pub fn generation_service(&self) -> GenerationService {
        GenerationService::new(
            &self.root,
            Box::new(HandlebarsRenderer::new(self.templates.clone())),
            Box::new(LocalFilesystem::new()),
        )
    }

    pub fn project_service(&self) -> ProjectService {
        ProjectService::new(&self.root, Box::new(LocalFilesystem::new()))
    }

    pub fn module_catalog(&self) -> ModuleCatalog {
        ModuleCatalog::new(&self.root, Box::new(LocalFilesystem::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_root_and_templates_flag() {
        let global = GlobalArgs {
            root: Some(PathBuf::from("/work/app")),
            templates: Some(PathBuf::from("/tpl")),
            ..GlobalArgs::default()
        };
        let ws = Workspace::resolve(&global, &AppConfig::default()).unwrap();
        assert_eq!(ws.root, PathBuf::from("/work/app"));
        assert_eq!(ws.templates, TemplateSource::Directory(PathBuf::from("/tpl")));
    }

    #[test]
    fn config_template_path_is_relative_to_root() {
        let global = GlobalArgs {
            root: Some(PathBuf::from("/work/app")),
            ..GlobalArgs::default()
        };
        let mut config = AppConfig::default();
        config.templates.local_path = Some(PathBuf::from("templates"));

        let ws = Workspace::resolve(&global, &config).unwrap();
        assert_eq!(
            ws.templates,
            TemplateSource::Directory(PathBuf::from("/work/app/templates"))
        );
    }
}
