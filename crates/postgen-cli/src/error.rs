//! Error handling for the postgen CLI.
//!
//! Provides structured errors with:
//! - One-line user-facing messages
//! - Short actionable hints
//! - Error chaining (shown with `-v`)
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use postgen_core::error::PostgenError;

// Re-export so callers only need `use crate::error::*`.
pub use postgen_core::error::ErrorCategory as CoreCategory;

/// Exit code for every failure.
pub const EXIT_FAILURE: u8 = 1;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// No slug was given on the command line.
    #[error("missing <SLUG> argument")]
    MissingSlug,

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `postgen-core`: missing template, existing
    /// output, or a failed copy.
    #[error(transparent)]
    Core(#[from] PostgenError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation outside the copy failed (locating the executable,
    /// writing to the terminal).
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The JSON report could not be produced.
    #[error("failed to serialise output")]
    Serialization(#[from] serde_json::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable hints for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingSlug => vec![
                "Usage: postgen [OPTIONS] <SLUG>".into(),
                "Example: postgen my-first-post".into(),
            ],

            Self::ConfigError { .. } => vec![format!(
                "Check your config file (default: {})",
                crate::config::AppConfig::config_path().display()
            )],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { .. } | Self::Serialization(_) => vec![],
        }
    }

    /// Get the error category for styling and log severity.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingSlug => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Usage | CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } | Self::Serialization(_) => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Every failure exits with [`EXIT_FAILURE`]; scripts only need to
    /// distinguish success from failure.  The category drives styling and
    /// log severity only.
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }

    /// Format the error for display with colors and hints.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = format!(
            "{} {}\n",
            "\u{2717} Error:".red().bold(), // ✗
            self.to_string().red()
        );

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "  {} {}\n",
                    "\u{2192}".dimmed(), // →
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        for suggestion in self.suggestions() {
            output.push_str(&format!("  {}\n", suggestion.yellow()));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("Error: {self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        for s in self.suggestions() {
            out.push_str(&format!("  {s}\n"));
        }

        out
    }

    /// Log the error using tracing.
    ///
    /// The user-facing message is printed separately, so these events stay
    /// below the default ERROR filter.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::info!("User error: {}", self),
            ErrorCategory::NotFound => tracing::info!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::warn!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::warn!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (missing slug, existing post).
    UserError,
    /// Resource not found (template).
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error (copy failure).
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert `io::Error` results into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}
