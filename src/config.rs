//! Global configuration management
//!
//! Config is stored at `<config dir>/config.toml`; see [`paths`] for how
//! the directory is resolved.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::paths;

/// Global gounit configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Template preferences
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// Template preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Installed template used when none is named on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl GlobalConfig {
    /// Load config from `dir`, or defaults when no file exists
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let path = paths::config_file(dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read configuration {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to read configuration {}", path.display()))
    }

    /// Save config to `dir`, creating it if needed
    pub fn save(&self, dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(dir)?;

        let path = paths::config_file(dir);
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("failed to write configuration {}", path.display()))?;
        Ok(())
    }

    /// Configured default template name
    #[must_use]
    pub fn default_template(&self) -> Option<&str> {
        self.templates.default.as_deref()
    }

    /// Set or clear the default template
    pub fn set_default_template(&mut self, name: Option<&str>) {
        self.templates.default = name.map(String::from);
    }
}
