//! Error handling for the react-architect CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Coloured and plain renderings

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use architect_core::error::{ArchitectError, ErrorCategory as CoreCategory};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `architect-core` or its adapters.
    #[error(transparent)]
    Core(#[from] ArchitectError),

    /// A configuration file could not be read or a key does not exist.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// Writing to the terminal or resolving the working directory failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),
            Self::Config { .. } => vec![
                "Check the file passed with --config, or .architect.toml in the project root"
                    .into(),
                "Known keys: output.no_color, output.format, templates.local_path".into(),
                "Run 'react-architect config path' to see which file is used".into(),
            ],
            Self::Io { .. } => vec!["Check that the terminal or pipe is still open".into()],
        }
    }

    /// Get the error category for styling and log severity.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound | CoreCategory::Template => ErrorCategory::NotFound,
                CoreCategory::Filesystem | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::Io { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Every failure exits with `1`, argument-parse failures included.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "\u{2717}".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "\u{2192}".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`].
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Missing template or resource.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Filesystem or system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use architect_core::{application::ApplicationError, domain::DomainError};
    use std::path::PathBuf;

    fn unknown_kind() -> CliError {
        ArchitectError::from(DomainError::UnknownItemKind {
            kind: "widget".into(),
        })
        .into()
    }

    #[test]
    fn core_message_is_passed_through() {
        assert_eq!(unknown_kind().to_string(), "Unknown item kind: widget");
        assert_eq!(unknown_kind().category(), ErrorCategory::UserError);
    }

    #[test]
    fn core_suggestions_list_valid_types() {
        assert!(
            unknown_kind()
                .suggestions()
                .iter()
                .any(|s| s.contains("component"))
        );
    }

    #[test]
    fn filesystem_errors_are_internal() {
        let err: CliError = ArchitectError::from(ApplicationError::FileWrite {
            path: PathBuf::from("/x/index.ts"),
            reason: "denied".into(),
        })
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn every_error_exits_with_one() {
        assert_eq!(unknown_kind().exit_code(), 1);
        assert_eq!(CliError::config("bad").exit_code(), 1);
        let io: CliError = std::io::Error::other("closed").into();
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn format_plain_has_header_and_suggestions() {
        let s = CliError::config("Unknown config key: 'x'").format_plain(false);
        assert!(s.contains("Error: Configuration error: Unknown config key: 'x'"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::Config {
            message: "failed to load".into(),
            source: Some(Box::new(std::io::Error::other("permission denied"))),
        };
        assert!(err.format_plain(true).contains("Caused by: permission denied"));
    }
}
