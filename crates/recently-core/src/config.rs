//! Configuration types for recently.
//!
//! [`Config::load`] layers `~/.config/recently/config.toml` (when present)
//! over the embedded defaults. Unlike most tools it never creates the file:
//! running against a forensic image must not write to the host.
//! [`Config::defaults`] returns the defaults without touching the filesystem.

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[output]
timestamp_format     = "%Y-%m-%dT%H:%M:%S%.6fZ"
unknown_timestamp    = "-"
include_icons        = true
include_applications = true
"#;

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
    /// chrono format string for known timestamps.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Text printed in place of an unknown timestamp.
    #[serde(default = "default_unknown_timestamp")]
    pub unknown_timestamp: String,
    #[serde(default = "default_true")]
    pub include_icons: bool,
    #[serde(default = "default_true")]
    pub include_applications: bool,
}

fn default_timestamp_format() -> String { "%Y-%m-%dT%H:%M:%S%.6fZ".to_string() }
fn default_unknown_timestamp() -> String { "-".to_string() }
fn default_true() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            unknown_timestamp: default_unknown_timestamp(),
            include_icons: default_true(),
            include_applications: default_true(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from the user config path, layered on top of the built-in
    /// defaults. A missing file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path, layered on top of the built-in defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
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
        .join("recently")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
