//! CLI configuration loading.
//!
//! An optional YAML file supplies category keyword overrides and default
//! roster filters; command-line flags win over the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use impact_common::{CategoryRules, RosterFilter};

/// Root configuration loaded from a YAML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Grade-band keyword overrides. Absent means the built-in rules.
    #[serde(default)]
    pub categories: Option<CategoryRules>,

    /// Default roster filter applied when no filter flags are given.
    #[serde(default)]
    pub filter: Option<RosterFilter>,
}

impl CliConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: CliConfig = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration when a path is given, defaults otherwise.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Effective categorization rules.
    pub fn rules(&self) -> CategoryRules {
        self.categories.clone().unwrap_or_default()
    }

    /// Effective default filter.
    pub fn default_filter(&self) -> RosterFilter {
        self.filter.clone().unwrap_or_default()
    }
}
