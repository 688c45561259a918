//! `init`: create the recommended project skeleton.

use tracing::instrument;

use crate::{commands::Workspace, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(root = %workspace.root.display()))]
pub fn execute(workspace: &Workspace, output: &OutputManager) -> CliResult<()> {
    output.info("Initializing React Architect structure...")?;

    let written = workspace.project_service().init_project()?;

    output.success("Project structure created successfully!")?;
    for keep in &written {
        if let Some(dir) = keep.parent() {
            output.item(&format!("{dir}/"))?;
        }
    }
    Ok(())
}
