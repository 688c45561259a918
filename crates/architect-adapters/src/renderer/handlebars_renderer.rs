//! Handlebars-backed renderer.

use std::{fs, io};

use handlebars::{Handlebars, no_escape};
use tracing::{debug, instrument};

use architect_core::{
    application::{
        ApplicationError,
        ports::{RenderFn, TemplateRenderer},
    },
    domain::{TemplateContext, TemplateId},
    error::ArchitectResult,
};

use crate::builtin_templates::{self, TemplateSource};

/// Renders `.hbs` templates with the `handlebars` crate.
///
/// Strict mode is on, so a placeholder with no value in the context fails
/// instead of rendering blank. HTML escaping is off because the output is
/// source code.
#[derive(Debug, Clone)]
pub struct HandlebarsRenderer {
    source: TemplateSource,
}

impl HandlebarsRenderer {
    pub fn new(source: TemplateSource) -> Self {
        Self { source }
    }

    /// Renderer over the templates compiled into the binary.
    pub fn embedded() -> Self {
        Self::new(TemplateSource::Embedded)
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    fn read(&self, id: TemplateId) -> ArchitectResult<String> {
        match &self.source {
            TemplateSource::Embedded => Ok(builtin_templates::embedded(id).to_string()),
            TemplateSource::Directory(dir) => {
                let path = dir.join(id.file_name());
                debug!(path = %path.display(), "reading template");
                fs::read_to_string(&path).map_err(|e| match e.kind() {
                    io::ErrorKind::NotFound => ApplicationError::TemplateNotFound { id }.into(),
                    _ => ApplicationError::RenderingFailed {
                        id,
                        reason: format!("cannot read {}: {}", path.display(), e),
                    }
                    .into(),
                })
            }
        }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::embedded()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    fn load(&self, id: TemplateId) -> ArchitectResult<RenderFn> {
        let text = self.read(id)?;

        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(no_escape);
        registry
            .register_template_string(id.name(), text)
            .map_err(|e| ApplicationError::RenderingFailed {
                id,
                reason: e.to_string(),
            })?;

        Ok(Box::new(
            move |ctx: &TemplateContext| -> ArchitectResult<String> {
                let out = registry.render(id.name(), ctx).map_err(|e| {
                    ApplicationError::RenderingFailed {
                        id,
                        reason: e.to_string(),
                    }
                })?;
                Ok(out)
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use architect_core::{domain::NamingSet, error::ArchitectError};
    use tempfile::TempDir;

    fn render(renderer: &HandlebarsRenderer, id: TemplateId, ctx: &TemplateContext) -> String {
        renderer.load(id).unwrap()(ctx).unwrap()
    }

    #[test]
    fn embedded_component_view_substitutes_names() {
        let ctx = TemplateContext::for_component(&NamingSet::derive("user card"));
        let out = render(&HandlebarsRenderer::embedded(), TemplateId::ComponentView, &ctx);

        assert!(out.contains("export const UserCard"));
        assert!(out.contains("data-testid=\"user-card\""));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn every_embedded_template_renders_with_its_context() {
        let names = NamingSet::derive("auth");
        let renderer = HandlebarsRenderer::embedded();
        for id in TemplateId::ALL {
            let ctx = match id {
                TemplateId::Service => TemplateContext::for_service(&names),
                TemplateId::Hook => TemplateContext::for_hook(&names),
                TemplateId::ModuleIndex => TemplateContext::for_module(&names),
                _ => TemplateContext::for_component(&names),
            };
            let out = render(&renderer, id, &ctx);
            assert!(!out.contains("{{"), "{id} left placeholder syntax");
        }
    }

    #[test]
    fn output_is_not_html_escaped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hook.ts.hbs"), "export const {{hookName}} = '<a>&';").unwrap();
        let renderer = HandlebarsRenderer::new(TemplateSource::Directory(dir.path().into()));

        let ctx = TemplateContext::new().with("hookName", "use<T>");
        assert_eq!(
            render(&renderer, TemplateId::Hook, &ctx),
            "export const use<T> = '<a>&';"
        );
    }

    #[test]
    fn missing_variable_is_a_rendering_failure() {
        let render_fn = HandlebarsRenderer::embedded()
            .load(TemplateId::Hook)
            .unwrap();
        let err = render_fn(&TemplateContext::new()).unwrap_err();
        assert!(matches!(
            err,
            ArchitectError::Application(ApplicationError::RenderingFailed {
                id: TemplateId::Hook,
                ..
            })
        ));
    }

    #[test]
    fn missing_file_in_directory_is_not_found() {
        let dir = TempDir::new().unwrap();
        let renderer = HandlebarsRenderer::new(TemplateSource::Directory(dir.path().into()));

        let err = renderer.load(TemplateId::Service).err().unwrap();
        assert_eq!(
            err,
            ArchitectError::Application(ApplicationError::TemplateNotFound {
                id: TemplateId::Service
            })
        );
    }

    #[test]
    fn invalid_template_syntax_fails_on_load() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("module.index.ts.hbs"), "{{#if name}} unterminated").unwrap();
        let renderer = HandlebarsRenderer::new(TemplateSource::Directory(dir.path().into()));

        assert!(matches!(
            renderer.load(TemplateId::ModuleIndex).err(),
            Some(ArchitectError::Application(ApplicationError::RenderingFailed { .. }))
        ));
    }
}
