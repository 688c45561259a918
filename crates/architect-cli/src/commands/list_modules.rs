//! `list-modules`: show the feature modules under `src/modules`.

use crate::{commands::Workspace, error::CliResult, output::OutputManager};

pub fn execute(workspace: &Workspace, output: &OutputManager) -> CliResult<()> {
    let modules = workspace.module_catalog().list_modules();

    if modules.is_empty() {
        output.warning("No modules found in src/modules")?;
        return Ok(());
    }

    output.header(&format!("Modules ({}):", modules.len()))?;
    for module in &modules {
        output.item(module)?;
    }
    Ok(())
}
