//! Generation Service - main application orchestrator.
//!
//! This service coordinates one generation request:
//! 1. Re-validate the item kind and name
//! 2. Derive the naming set and target directory
//! 3. Render every template into a `GenerationPlan`
//! 4. Commit the plan to the filesystem, entry by entry
//!
//! Rendering finishes before the first write, so template errors never leave
//! partial output. Commit itself is not transactional.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateRenderer},
        services::materializer::Materializer,
    },
    domain::{
        DomainValidator, GenerationPlan, ItemKind, ItemRequest, NamingSet, PlanEntry,
        ProjectLayout, RelativePath, TemplateContext, TemplateId,
    },
    error::ArchitectResult,
};

/// What a finished generation request wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub kind: ItemKind,
    pub names: NamingSet,
    pub target_dir: RelativePath,
    pub directories: Vec<RelativePath>,
    pub files: Vec<RelativePath>,
}

/// Main generation service.
///
/// Owns the project root explicitly; nothing here reads the process working
/// directory.
pub struct GenerationService {
    root: PathBuf,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use architect_core::application::GenerationService;
    ///
    /// let service = GenerationService::new(
    ///     "./my-app", // project root
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// service.generate_item("component", "user card", None)?;
    /// ```
    pub fn new(
        root: impl Into<PathBuf>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            root: root.into(),
            renderer,
            filesystem,
        }
    }

    /// Generate one item from untrusted strings.
    ///
    /// The kind is parsed again even if the caller already validated it.
    /// Fails with `UnknownItemKind` before touching the filesystem.
    #[instrument(skip_all, fields(kind = %kind, name = %raw_name, module = ?module))]
    pub fn generate_item(
        &self,
        kind: &str,
        raw_name: &str,
        module: Option<&str>,
    ) -> ArchitectResult<GenerationReport> {
        let request = DomainValidator::validate_request(kind, raw_name, module)?;
        self.generate(&request)
    }

    /// Generate one item from a validated request.
    pub fn generate(&self, request: &ItemRequest) -> ArchitectResult<GenerationReport> {
        info!("Generating {}", request);

        let plan = self.plan(request)?;
        DomainValidator::validate_plan(&plan)?;

        self.commit(&plan)?;

        let report = GenerationReport {
            kind: plan.kind(),
            names: plan.names().clone(),
            target_dir: plan.target_dir().clone(),
            directories: plan.directories().cloned().collect(),
            files: plan.files().map(|f| f.path.clone()).collect(),
        };

        info!(
            files = report.files.len(),
            target = %report.target_dir,
            "Generation completed"
        );
        Ok(report)
    }

    /// Render everything a request would write, without writing it.
    pub fn plan(&self, request: &ItemRequest) -> ArchitectResult<GenerationPlan> {
        let names = NamingSet::derive(request.raw_name());
        let kind = request.kind();
        let dir = ProjectLayout::target_dir(kind, &names, request.module())?;
        let mut plan = GenerationPlan::new(kind, names.clone(), dir.clone());

        match kind {
            ItemKind::Component => {
                let ctx = TemplateContext::for_component(&names);
                let pascal = &names.pascal;
                plan.add_directory(dir.clone());
                for (id, file) in [
                    (TemplateId::ComponentView, format!("{pascal}.tsx")),
                    (TemplateId::ComponentStyles, format!("{pascal}.module.scss")),
                    (TemplateId::ComponentTypes, format!("{pascal}.types.ts")),
                    (TemplateId::ComponentIndex, ProjectLayout::INDEX_FILE.to_string()),
                ] {
                    plan.add_file(dir.join(file)?, self.render(id, &ctx)?);
                }
            }
            ItemKind::Service => {
                let ctx = TemplateContext::for_service(&names);
                plan.add_directory(dir.clone());
                plan.add_file(
                    dir.join(format!("{}Service.ts", names.pascal))?,
                    self.render(TemplateId::Service, &ctx)?,
                );
            }
            ItemKind::Hook => {
                let ctx = TemplateContext::for_hook(&names);
                plan.add_directory(dir.clone());
                plan.add_file(
                    dir.join(format!("{}.ts", names.hook_name))?,
                    self.render(TemplateId::Hook, &ctx)?,
                );
            }
            ItemKind::Module => {
                let ctx = TemplateContext::for_module(&names);
                for sub in ProjectLayout::MODULE_SUBDIRS {
                    plan.add_directory(dir.join(sub)?);
                }
                plan.add_file(
                    dir.join(ProjectLayout::INDEX_FILE)?,
                    self.render(TemplateId::ModuleIndex, &ctx)?,
                );
            }
        }

        debug!(entries = plan.entry_count(), "Plan built");
        Ok(plan)
    }

    /// Write every plan entry in order.
    ///
    /// Stops at the first failure; entries already written stay on disk.
    pub fn commit(&self, plan: &GenerationPlan) -> ArchitectResult<()> {
        let materializer = Materializer::new(&self.root, self.filesystem.as_ref());

        for entry in plan.entries() {
            match entry {
                PlanEntry::Directory(dir) => materializer.ensure_dir(dir)?,
                PlanEntry::File(file) => materializer.write_file(&file.path, &file.content)?,
            }
        }

        Ok(())
    }

    fn render(&self, id: TemplateId, ctx: &TemplateContext) -> ArchitectResult<String> {
        let render = self.renderer.load(id)?;
        render(ctx)
    }
}
