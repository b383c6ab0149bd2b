//! Configuration files.

use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use std::path::Path;
use txenc_tracing::{ColorMode, LogFormat};

/// Configuration for the txenc binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration.
    pub log: LogConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

impl Config {
    /// Loads the config at `path`, writing the defaults there first if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        confy::load_path::<Self>(path)
            .wrap_err_with(|| format!("Could not load config file {}", path.display()))
    }

    /// Renders the config as TOML.
    pub fn to_toml(&self) -> eyre::Result<String> {
        toml::to_string_pretty(self).wrap_err("Could not serialize config")
    }
}

/// Stdout logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Format of the stdout layer.
    pub format: LogFormat,
    /// Comma separated filter directives added on top of the verbosity level.
    pub filter: String,
    /// When to emit ANSI colors.
    pub color: ColorMode,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { format: LogFormat::Terminal, filter: String::new(), color: ColorMode::Auto }
    }
}

/// How encoded bytes are printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Prefix hex output with `0x`.
    pub hex_prefix: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { hex_prefix: true }
    }
}
