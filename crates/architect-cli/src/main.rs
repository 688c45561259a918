//! # react-architect
//!
//! Scaffolds a React + TypeScript feature-module layout and generates
//! components, services, hooks and modules into it.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Resolve the project root and load configuration.
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success, `--help`, `--version`           |
//! |  1   | Any failure, including invalid arguments |

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    commands::Workspace,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_exit_code(&e));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let no_color = cli.global.no_color;
    match run(cli) {
        Ok(()) => {
            info!("react-architect completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

/// Load configuration and dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    let Cli { global, command } = cli;

    // Completions need neither a project nor a config file.
    if let Commands::Completions(args) = command {
        return commands::completions::execute(args);
    }

    let config = load_config(&global)?;
    let workspace = Workspace::resolve(&global, &config)?;
    let output = OutputManager::new(&global, &config);

    match command {
        Commands::Init => commands::init::execute(&workspace, &output),
        Commands::Generate(args) => commands::generate::execute(args, &workspace, &output),
        Commands::Module(args) => commands::module::execute(args, &workspace, &output),
        Commands::ListModules => commands::list_modules::execute(&workspace, &output),
        Commands::Config(cmd) => {
            commands::config::execute(cmd, &global, &config, &workspace, &output)
        }
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

fn load_config(global: &GlobalArgs) -> CliResult<AppConfig> {
    let root = match &global.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };

    AppConfig::load(global.config.as_deref(), &root).map_err(|e| CliError::Config {
        message: format!("{e:#}"),
        source: Some(e.into()),
    })
}

/// `--help` and `--version` arrive as parse "errors" and exit 0; every real
/// usage error exits 1, like any other failure.
fn parse_exit_code(err: &clap::Error) -> u8 {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Translate a `CliError` into a user message and an exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    let msg = if !no_color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
