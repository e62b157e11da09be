//! Configuration types for liftlog.
//!
//! [`Config::load`] layers `~/.config/liftlog/config.toml` (if present) and
//! `LIFTLOG_*` environment variables over the built-in defaults.
//! [`Config::defaults`] returns the defaults without touching the filesystem
//! or environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[output]
format    = "delimited"
delimiter = ";"
header    = false
"#;

const ENV_PREFIX: &str = "LIFTLOG";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// `delimited` or `jsonl`.
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Emit a `date;code;data` header before delimited output.
    #[serde(default)]
    pub header: bool,
}

fn default_format() -> String { "delimited".to_string() }
fn default_delimiter() -> String { ";".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            delimiter: default_delimiter(),
            header: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from the user config file, if it exists, then the environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::build(config::File::from(config_path().as_path()).required(false))
    }

    /// Load from an explicit file, which must exist, then the environment.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::build(config::File::from(path).required(true))
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn build<S>(file: S) -> anyhow::Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("liftlog")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
