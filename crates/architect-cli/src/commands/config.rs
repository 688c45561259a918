//! `config`: inspect the effective configuration.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    commands::Workspace,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: &AppConfig,
    workspace: &Workspace,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.print(&get_config_value(config, &key)?)?;
        }
        ConfigCommands::List => {
            let serialised = toml::to_string_pretty(config).map_err(|e| CliError::Config {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.header("Current Configuration:")?;
            output.print(serialised.trim_end())?;
        }
        ConfigCommands::Path => {
            let path = AppConfig::active_config_path(global.config.as_deref(), &workspace.root);
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "templates.local_path" => Ok(config
            .templates
            .local_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        _ => Err(CliError::config(format!("Unknown config key: '{key}'"))),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn get_known_keys() {
        let mut cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "auto");
        assert_eq!(get_config_value(&cfg, "templates.local_path").unwrap(), "");

        cfg.templates.local_path = Some(PathBuf::from("tpl"));
        assert_eq!(get_config_value(&cfg, "templates.local_path").unwrap(), "tpl");
    }

    #[test]
    fn get_unknown_key_is_error() {
        assert!(matches!(
            get_config_value(&AppConfig::default(), "defaults.lang"),
            Err(CliError::Config { .. })
        ));
    }
}
