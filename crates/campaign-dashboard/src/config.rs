//! Dashboard configuration.
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags, an optional YAML config file, and built-in defaults.
//!
//! ```yaml
//! search_fields: [name, description, recognition, tone]
//! top_strategies: 5
//! strict: false
//! output: auto
//! ```

use std::path::Path;

use anyhow::Context;
use campaign_seeker::{CriteriaPolicy, DEFAULT_SEARCH_FIELDS, DEFAULT_TOP_STRATEGIES};
use serde::Deserialize;

use crate::cli::Cli;
use crate::output::OutputMode;

/// Contents of a config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub search_fields: Option<Vec<String>>,
    pub top_strategies: Option<usize>,
    pub strict: Option<bool>,
    pub output: Option<OutputMode>,
}

impl DashboardConfig {
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty map.
        if source.trim().is_empty() {
            return Ok(DashboardConfig::default());
        }
        serde_yaml::from_str(source)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        DashboardConfig::from_yaml(&source)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// Effective settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Field names searched when the command gives none.
    pub search_fields: Vec<String>,
    pub top_strategies: usize,
    pub policy: CriteriaPolicy,
    pub output: OutputMode,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            search_fields: DEFAULT_SEARCH_FIELDS
                .iter()
                .map(|f| f.as_str().to_string())
                .collect(),
            top_strategies: DEFAULT_TOP_STRATEGIES,
            policy: CriteriaPolicy::Lenient,
            output: OutputMode::Auto,
        }
    }
}

impl Settings {
    /// Merges global flags over the config file over the defaults.
    pub fn resolve(cli: &Cli, config: &DashboardConfig) -> Self {
        let defaults = Settings::default();

        let strict = cli.strict_flag().or(config.strict).unwrap_or(false);

        Settings {
            search_fields: config
                .search_fields
                .clone()
                .unwrap_or(defaults.search_fields),
            top_strategies: config.top_strategies.unwrap_or(defaults.top_strategies),
            policy: if strict {
                CriteriaPolicy::Strict
            } else {
                CriteriaPolicy::Lenient
            },
            output: cli.output.or(config.output).unwrap_or(defaults.output),
        }
    }
}
