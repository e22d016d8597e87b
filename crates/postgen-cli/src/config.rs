//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the resulting
//! `PostLayout`.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--dir`, `--template`, `--view-base`; applied by the
//!    scaffold command, not here)
//! 2. Environment variables (`POSTGEN_SITE__DIR`, `POSTGEN_OUTPUT__NO_COLOR`, ...)
//! 3. Config file (`--config FILE`, or the platform config path if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use postgen_core::domain::{DEFAULT_TEMPLATE, DEFAULT_VIEW_BASE};

use crate::error::{CliError, CliResult};

/// Prefix of environment overrides.
const ENV_PREFIX: &str = "POSTGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the template lives and how posts are addressed.
    pub site: SiteConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `None` means the directory containing the executable.
    pub dir: Option<PathBuf>,
    pub template: String,
    pub view_base: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            dir: None,
            template: DEFAULT_TEMPLATE.into(),
            view_base: DEFAULT_VIEW_BASE.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.  With
    /// `None` the default location is used and may be absent.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let file = match config_file {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.postgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "postgen", "postgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".postgen.toml"))
    }
}
