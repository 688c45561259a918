//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use architect_core::domain::ItemKind;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "react-architect",
    bin_name = "react-architect",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} React + TypeScript project architecture generator",
    long_about = "react-architect lays out a feature-module project structure \
                  and generates components, services, hooks and modules into it.",
    after_help = "EXAMPLES:\n\
        \x20 react-architect init\n\
        \x20 react-architect generate component \"user card\"\n\
        \x20 react-architect g hook auth -m billing\n\
        \x20 react-architect module billing service invoice\n\
        \x20 react-architect ls",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the project directory skeleton.
    #[command(
        about = "Initialize project structure",
        after_help = "Creates src/core/{services,hooks,context}, src/components,\n\
            src/shared/{ui,utils} and src/modules, each with a .gitkeep."
    )]
    Init,

    /// Generate a component, module, service or hook.
    #[command(
        visible_alias = "g",
        about = "Generate a new item",
        after_help = "EXAMPLES:\n\
            \x20 react-architect generate component \"user card\"\n\
            \x20 react-architect generate service auth --module billing\n\
            \x20 react-architect g module reporting"
    )]
    Generate(GenerateArgs),

    /// Generate an item inside a feature module.
    #[command(
        visible_alias = "m",
        about = "Generate an item inside a module",
        after_help = "EXAMPLES:\n\
            \x20 react-architect module billing component invoice-table\n\
            \x20 react-architect m billing hook payments"
    )]
    Module(ModuleArgs),

    /// List the feature modules under src/modules.
    #[command(visible_alias = "ls", about = "List all modules")]
    ListModules,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 react-architect completions bash > ~/.local/share/bash-completion/completions/react-architect\n\
            \x20 react-architect completions zsh  > ~/.zfunc/_react-architect\n\
            \x20 react-architect completions fish > ~/.config/fish/completions/react-architect.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 react-architect config path\n\
            \x20 react-architect config list\n\
            \x20 react-architect config get templates.local_path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// What to generate.
    #[arg(value_name = "TYPE", value_enum, help = "Item type")]
    pub kind: ItemType,

    /// Item name; any casing, words may be separated by spaces, `-` or `_`.
    #[arg(value_name = "NAME", help = "Item name")]
    pub name: String,

    /// Place the item inside `src/modules/<MODULE>`. Ignored for modules.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        help = "Target module"
    )]
    pub module: Option<String>,
}

// ── module ────────────────────────────────────────────────────────────────────

/// Arguments for `module`.
#[derive(Debug, Args)]
pub struct ModuleArgs {
    /// Module to generate into.
    #[arg(value_name = "MODULE", help = "Module name")]
    pub module: String,

    /// What to generate. Modules cannot be nested.
    #[arg(value_name = "TYPE", value_enum, help = "Item type")]
    pub kind: ModuleItemType,

    #[arg(value_name = "NAME", help = "Item name")]
    pub name: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Item types accepted by `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ItemType {
    Component,
    Module,
    Service,
    Hook,
}

impl From<ItemType> for ItemKind {
    fn from(value: ItemType) -> Self {
        match value {
            ItemType::Component => ItemKind::Component,
            ItemType::Module => ItemKind::Module,
            ItemType::Service => ItemKind::Service,
            ItemType::Hook => ItemKind::Hook,
        }
    }
}

/// Item types accepted by `module`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ModuleItemType {
    Component,
    Service,
    Hook,
}

impl From<ModuleItemType> for ItemKind {
    fn from(value: ModuleItemType) -> Self {
        match value {
            ModuleItemType::Component => ItemKind::Component,
            ModuleItemType::Service => ItemKind::Service,
            ModuleItemType::Hook => ItemKind::Hook,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn item_types_map_to_kinds() {
        for (ty, kind) in [
            (ItemType::Component, "component"),
            (ItemType::Module, "module"),
            (ItemType::Service, "service"),
            (ItemType::Hook, "hook"),
        ] {
            assert_eq!(ItemKind::from(ty).as_str(), kind);
        }
    }

    #[test]
    fn parse_generate_with_module() {
        let cli = Cli::parse_from([
            "react-architect",
            "generate",
            "component",
            "user card",
            "-m",
            "billing",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.kind, ItemType::Component);
        assert_eq!(args.name, "user card");
        assert_eq!(args.module.as_deref(), Some("billing"));
    }

    #[test]
    fn generate_alias_g() {
        let cli = Cli::parse_from(["react-architect", "g", "hook", "auth"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn invalid_type_is_rejected() {
        let err = Cli::try_parse_from(["react-architect", "generate", "widget", "x"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn module_command_rejects_nested_module() {
        assert!(
            Cli::try_parse_from(["react-architect", "module", "billing", "module", "x"]).is_err()
        );
        let cli = Cli::parse_from(["react-architect", "m", "billing", "service", "invoice"]);
        let Commands::Module(args) = cli.command else {
            panic!("expected Module command");
        };
        assert_eq!(args.module, "billing");
        assert_eq!(args.kind, ModuleItemType::Service);
    }

    #[test]
    fn list_modules_alias_ls() {
        let cli = Cli::parse_from(["react-architect", "ls"]);
        assert!(matches!(cli.command, Commands::ListModules));
    }

    #[test]
    fn global_root_after_subcommand() {
        let cli = Cli::parse_from(["react-architect", "init", "-C", "/tmp/app"]);
        assert_eq!(cli.global.root.as_deref(), Some(std::path::Path::new("/tmp/app")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["react-architect", "--quiet", "--verbose", "ls"]);
        assert!(result.is_err());
    }
}
