//! `generate`: create a component, module, service or hook.

use tracing::{info, instrument};

use architect_core::{application::GenerationReport, domain::ItemKind};

use crate::{
    cli::GenerateArgs,
    commands::Workspace,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(kind = ?args.kind, name = %args.name))]
pub fn execute(args: GenerateArgs, workspace: &Workspace, output: &OutputManager) -> CliResult<()> {
    generate(
        workspace,
        ItemKind::from(args.kind),
        &args.name,
        args.module.as_deref(),
        output,
    )
}

/// Run one generation request and print what it wrote.
pub fn generate(
    workspace: &Workspace,
    kind: ItemKind,
    name: &str,
    module: Option<&str>,
    output: &OutputManager,
) -> CliResult<()> {
    output.info(&format!("Generating {kind}: {name}..."))?;

    let report = workspace
        .generation_service()
        .generate_item(kind.as_str(), name, module)?;

    info!(files = report.files.len(), "Item generated");
    print_report(&report, output)
}

fn print_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    let shown = match report.kind {
        ItemKind::Hook => &report.names.hook_name,
        ItemKind::Module => &report.names.kebab,
        ItemKind::Component | ItemKind::Service => &report.names.pascal,
    };
    output.success(&format!(
        "{} '{}' created in {}",
        report.kind, shown, report.target_dir
    ))?;

    if report.kind == ItemKind::Module {
        for dir in &report.directories {
            output.item(&format!("{dir}/"))?;
        }
    }
    for file in &report.files {
        output.item(&file.to_string())?;
    }
    Ok(())
}
