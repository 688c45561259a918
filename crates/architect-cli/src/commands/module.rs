//! `module`: generate an item inside a feature module.
//!
//! Shorthand for `generate <type> <name> --module <module>`.

use tracing::instrument;

use architect_core::domain::ItemKind;

use crate::{
    cli::ModuleArgs,
    commands::{Workspace, generate},
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(module = %args.module, kind = ?args.kind, name = %args.name))]
pub fn execute(args: ModuleArgs, workspace: &Workspace, output: &OutputManager) -> CliResult<()> {
    let known = workspace.module_catalog().list_modules();
    if !known.contains(&args.module) {
        output.warning(&format!(
            "Module '{}' does not exist yet; creating its directories",
            args.module
        ))?;
    }

    generate::generate(
        workspace,
        ItemKind::from(args.kind),
        &args.name,
        Some(&args.module),
        output,
    )
}
