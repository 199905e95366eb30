//! Application configuration management.
//!
//! Settings are layered with figment, later layers winning:
//!
//! 1. Built-in defaults ([`Config::default`])
//! 2. TOML file: `--config FILE`, or `config.toml` in the platform config
//!    directory
//! 3. Environment variables prefixed with `NAMEDUPE_`
//!    (e.g. `NAMEDUPE_LANGUAGE=pt`)
//! 4. Command-line flags (applied by the caller)
//!
//! ```toml
//! extensions = [".ydr", ".ycd"]
//! language = "pt"
//! output = "json"
//! follow_symlinks = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::i18n::Language;

/// Built-in extension presets with the catalog key of their description.
pub const EXTENSION_PRESETS: &[(&str, &str)] = &[
    (".ycd", "ext_ycd"),
    (".ydr", "ext_ydr"),
    (".ytyp", "ext_ytyp"),
    (".ybn", "ext_ybn"),
];

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "NAMEDUPE_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extensions scanned when none are given on the command line.
    pub extensions: Vec<String>,
    /// Interface language.
    pub language: Language,
    /// Default output format.
    pub output: OutputFormat,
    /// Follow symbolic links to directories while walking.
    pub follow_symlinks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: EXTENSION_PRESETS
                .iter()
                .map(|(ext, _)| (*ext).to_string())
                .collect(),
            language: Language::En,
            output: OutputFormat::Table,
            follow_symlinks: false,
        }
    }
}

impl Config {
    /// Load the layered configuration.
    ///
    /// An explicitly given file must exist and parse. Problems with the
    /// default-path file fall back to defaults plus environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` is missing or invalid, or if the
    /// environment holds values of the wrong type.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Self::figment(Some(path))
                .extract()
                .with_context(|| format!("invalid config file {}", path.display()));
        }

        let default_path = Self::config_path();
        match Self::figment(default_path.as_deref()).extract() {
            Ok(config) => Ok(config),
            Err(e) => {
                log::debug!("Failed to load config file, using defaults: {}", e);
                Self::figment(None)
                    .extract()
                    .context("invalid NAMEDUPE_ environment configuration")
            }
        }
    }

    /// Build the figment stack: defaults, optional TOML file, environment.
    #[must_use]
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Default platform-specific configuration path.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "namedupe", "namedupe")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
