//! CLI configuration with TOML file support.

use anyhow::Context;
use eurovision_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults for the `eurovision` binary.
///
/// Every field is optional in the file; CLI flags and env vars override it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Audience share of the final score when `--audience-percent` is absent.
    #[serde(default = "default_audience_percent")]
    pub audience_percent: i64,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_audience_percent() -> i64 {
    50
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the default configuration to `path`, refusing to overwrite.
    pub fn write_default(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!("config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, Self::default().to_toml_string()?)
            .with_context(|| format!("failed to write config to {}", path.display()))
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            audience_percent: default_audience_percent(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
