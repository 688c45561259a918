//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ARCHITECT__OUTPUT__FORMAT=plain`
//! 3. Config file: `--config <FILE>` if given, otherwise the project-local
//!    `.architect.toml` layered over the user config file
//! 4. Built-in defaults (always present)

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "ARCHITECT";

/// Project-local configuration file name.
pub const LOCAL_CONFIG_FILE: &str = ".architect.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human` or `plain`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `.hbs` files replacing the built-in templates.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from files and the process environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&Path>, project_root: &Path) -> anyhow::Result<Self> {
        Self::load_from(config_file, project_root, None)
    }

    /// [`Self::load`] with the environment supplied as a map instead of read
    /// from the process.
    pub fn load_from(
        config_file: Option<&Path>,
        project_root: &Path,
        env: Option<HashMap<String, String>>,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                builder = builder
                    .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml));
            }
            None => {
                if let Some(user) = Self::user_config_path() {
                    builder = builder.add_source(File::from(user).required(false));
                }
                builder = builder.add_source(
                    File::from(project_root.join(LOCAL_CONFIG_FILE))
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .context("failed to read configuration")?;

        config
            .try_deserialize()
            .context("invalid configuration values")
    }

    /// Path of the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "react-architect", "react-architect")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// The file that configuration is read from, for display.
    ///
    /// Explicit path first, then an existing project-local file, then the
    /// user config location, falling back to the project-local name.
    pub fn active_config_path(config_file: Option<&Path>, project_root: &Path) -> PathBuf {
        if let Some(path) = config_file {
            return path.to_path_buf();
        }
        let local = project_root.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return local;
        }
        Self::user_config_path().unwrap_or(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env() -> Option<HashMap<String, String>> {
        Some(HashMap::new())
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, "auto");
        assert!(cfg.templates.local_path.is_none());
    }

    #[test]
    fn empty_project_loads_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(None, tmp.path(), no_env()).unwrap();
        assert_eq!(cfg.output, OutputConfig::default());
    }

    #[test]
    fn local_file_is_read() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(LOCAL_CONFIG_FILE),
            "[templates]\nlocal_path = \"tpl\"\n\n[output]\nformat = \"plain\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(None, tmp.path(), no_env()).unwrap();
        assert_eq!(cfg.templates.local_path, Some(PathBuf::from("tpl")));
        assert_eq!(cfg.output.format, "plain");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn env_overrides_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(LOCAL_CONFIG_FILE), "[output]\nno_color = false\n")
            .unwrap();
        let env = HashMap::from([("ARCHITECT__OUTPUT__NO_COLOR".to_string(), "true".to_string())]);

        let cfg = AppConfig::load_from(None, tmp.path(), Some(env)).unwrap();
        assert!(cfg.output.no_color);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        assert!(AppConfig::load_from(Some(&missing), tmp.path(), no_env()).is_err());
    }

    #[test]
    fn active_path_prefers_explicit_then_local() {
        let tmp = TempDir::new().unwrap();
        let explicit = PathBuf::from("/etc/architect.toml");
        assert_eq!(
            AppConfig::active_config_path(Some(&explicit), tmp.path()),
            explicit
        );

        std::fs::write(tmp.path().join(LOCAL_CONFIG_FILE), "").unwrap();
        assert_eq!(
            AppConfig::active_config_path(None, tmp.path()),
            tmp.path().join(LOCAL_CONFIG_FILE)
        );
    }
}
