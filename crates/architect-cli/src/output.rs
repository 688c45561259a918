//! Output management and formatting.
//!
//! Everything user-facing goes to stdout through [`OutputManager`]; logs and
//! error reports go to stderr.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// An explicit `--output-format` beats `output.format` from config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = requested_format(args, config);
        let resolved_format = match format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{2713}", msg, |s| s.green().bold().to_string())
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{26a0}", msg, |s| s.yellow().bold().to_string())
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{2139}", msg, |s| s.blue().bold().to_string())
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Indented list entry, dimmed when colour is on.
    pub fn item(&self, text: &str) -> io::Result<()> {
        if self.no_color {
            self.print(&format!("  - {text}"))
        } else {
            self.print(&format!("  {} {}", "-".dimmed(), text))
        }
    }

    fn marked(&self, mark: &str, msg: &str, paint: impl Fn(&str) -> String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{mark} {msg}")
        } else {
            format!("{} {}", paint(mark), msg)
        };
        self.term.write_line(&line)
    }
}

/// `--output-format` unless it is `auto`, then `output.format` from config.
fn requested_format(args: &GlobalArgs, config: &AppConfig) -> OutputFormat {
    match args.output_format {
        OutputFormat::Auto => OutputFormat::from_config(&config.output.format),
        explicit => explicit,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(quiet: bool, no_color: bool, output_format: OutputFormat) -> GlobalArgs {
        GlobalArgs {
            quiet,
            no_color,
            output_format,
            ..GlobalArgs::default()
        }
    }

    #[test]
    fn quiet_print_is_ok() {
        let out = OutputManager::new(&args(true, true, OutputFormat::Plain), &AppConfig::default());
        assert!(out.quiet);
        assert!(out.print("hello").is_ok());
        assert!(out.success("hidden").is_ok());
    }

    #[test]
    fn human_format_keeps_colour_unless_disabled() {
        let cfg = AppConfig::default();
        assert!(!OutputManager::new(&args(false, false, OutputFormat::Human), &cfg).no_color);
        assert!(OutputManager::new(&args(false, true, OutputFormat::Human), &cfg).no_color);
    }

    #[test]
    fn config_no_color_disables_colour() {
        let mut cfg = AppConfig::default();
        cfg.output.no_color = true;
        let out = OutputManager::new(&args(false, false, OutputFormat::Human), &cfg);
        assert!(out.no_color);
    }

    #[test]
    fn plain_never_colours() {
        let out = OutputManager::new(&args(false, false, OutputFormat::Plain), &AppConfig::default());
        assert!(out.no_color);
    }

    #[test]
    fn config_format_used_when_flag_is_auto() {
        let mut cfg = AppConfig::default();
        cfg.output.format = "human".into();
        let flags = args(false, false, OutputFormat::Auto);
        assert_eq!(requested_format(&flags, &cfg), OutputFormat::Human);

        let flags = args(false, false, OutputFormat::Plain);
        assert_eq!(requested_format(&flags, &cfg), OutputFormat::Plain);
    }
}
