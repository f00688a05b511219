//! Configuration file loading for currymix.
//!
//! Discovers and loads `currymix.toml` from the working directory (or an explicit path).
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "currymix.toml";

/// Top-level configuration from currymix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrymixConfig {
    pub output: OutputConfig,
    pub solver: SolverConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Re-check every customer against the assignment before printing it.
    pub verify: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Look for `currymix.toml` directly inside `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

pub fn load_config(path: &Utf8Path) -> anyhow::Result<CurrymixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

pub fn parse_config(contents: &str) -> anyhow::Result<CurrymixConfig> {
    let config: CurrymixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return default if not found.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<CurrymixConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(CurrymixConfig::default()),
    }
}

/// Settings the run actually uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergedConfig {
    pub format: OutputFormat,
    pub verify: bool,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: CurrymixConfig,
}

impl ConfigMerger {
    pub fn new(config: CurrymixConfig) -> Self {
        Self { config }
    }

    /// An explicit `--format` replaces the file value; `--verify` can only switch checking on.
    pub fn merge_args(self, cli_format: Option<OutputFormat>, cli_verify: bool) -> MergedConfig {
        MergedConfig {
            format: cli_format.unwrap_or(self.config.output.format),
            verify: cli_verify || self.config.solver.verify,
        }
    }
}
