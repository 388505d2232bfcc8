//! Installed test templates
//!
//! Templates are plain files under `<config dir>/templates/`, named after
//! the file they were installed from. The name `default` always refers to
//! the built-in template and can be neither installed nor removed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{info, warn};

use crate::adapters::{GoParser, PruneImports};
use crate::config::GlobalConfig;
use crate::core::models::SelectionCriteria;
use crate::core::services::{Generator, SourceText, normalize};
use crate::error::Error;
use crate::paths;
use crate::template::{DEFAULT_TEMPLATE_NAME, DEFAULT_TEST, TemplateSet};

/// Source every candidate template must produce valid Go for
const SAMPLE_SOURCE: &str = "package funcs\n\nfunc function() int {\n\treturn 0\n}\n";

/// One row of the template listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Template name
    pub name: String,
    /// Whether `gen` uses it when no template is named
    pub is_default: bool,
}

/// Template files and the default selection under one config directory
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    /// Create a store rooted at a config directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store in the resolved user config directory
    #[must_use]
    pub fn open() -> Self {
        Self::new(paths::config_dir())
    }

    fn template_path(&self, name: &str) -> PathBuf {
        paths::templates_dir(&self.dir).join(name)
    }

    /// Whether a template of this name can be loaded
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        name == DEFAULT_TEMPLATE_NAME || self.template_path(name).is_file()
    }

    /// Validate and install a template file, returning its name
    pub fn add(&self, file: &Path) -> anyhow::Result<String> {
        let name = file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::CommandLine(format!("invalid template file: {}", file.display())))?
            .to_string();
        if name == DEFAULT_TEMPLATE_NAME {
            return Err(Error::CommandLine(format!(
                "template name '{DEFAULT_TEMPLATE_NAME}' is reserved"
            ))
            .into());
        }

        let text = fs::read_to_string(file)
            .with_context(|| format!("failed to read template {}", file.display()))?;
        validate(&text).with_context(|| format!("template {} is not usable", file.display()))?;

        let dest = self.template_path(&name);
        fs::create_dir_all(paths::templates_dir(&self.dir))?;
        fs::write(&dest, text).with_context(|| format!("failed to install {}", dest.display()))?;
        info!("installed template {name}");
        Ok(name)
    }

    /// Built-in template first, then installed ones by name
    pub fn list(&self) -> anyhow::Result<Vec<TemplateEntry>> {
        let mut names = self.installed()?;
        names.sort();

        let current = self.current_default()?;
        let mut entries = Vec::with_capacity(names.len() + 1);
        entries.push(TemplateEntry {
            name: DEFAULT_TEMPLATE_NAME.to_string(),
            is_default: current == DEFAULT_TEMPLATE_NAME,
        });
        entries.extend(names.into_iter().map(|name| TemplateEntry {
            is_default: name == current,
            name,
        }));
        Ok(entries)
    }

    /// Make `name` the default template
    pub fn set_default(&self, name: &str) -> anyhow::Result<()> {
        if !self.exists(name) {
            return Err(not_found(name).into());
        }

        let mut config = GlobalConfig::load(&self.dir)?;
        config.set_default_template(Some(name));
        config.save(&self.dir)?;
        info!("default template is now {name}");
        Ok(())
    }

    /// Delete an installed template
    pub fn remove(&self, name: &str) -> anyhow::Result<()> {
        if name == DEFAULT_TEMPLATE_NAME {
            return Err(Error::CommandLine(format!(
                "template '{DEFAULT_TEMPLATE_NAME}' cannot be removed"
            ))
            .into());
        }
        let path = self.template_path(name);
        if !path.is_file() {
            return Err(not_found(name).into());
        }

        fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))?;

        let mut config = GlobalConfig::load(&self.dir)?;
        if config.default_template() == Some(name) {
            config.set_default_template(None);
            config.save(&self.dir)?;
        }
        info!("removed template {name}");
        Ok(())
    }

    /// Text of a test template; `None` means the configured default
    pub fn load(&self, name: Option<&str>) -> anyhow::Result<String> {
        let name = match name {
            Some(name) => name.to_string(),
            None => self.current_default()?,
        };
        if name == DEFAULT_TEMPLATE_NAME {
            return Ok(DEFAULT_TEST.to_string());
        }

        let path = self.template_path(&name);
        if !path.is_file() {
            return Err(not_found(&name).into());
        }
        fs::read_to_string(&path).with_context(|| format!("failed to read template {}", path.display()))
    }

    fn installed(&self) -> anyhow::Result<Vec<String>> {
        let dir = paths::templates_dir(&self.dir);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file()
                && let Some(name) = entry.file_name().to_str()
            {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Configured default, falling back to the built-in one when it is
    /// unset or no longer installed
    fn current_default(&self) -> anyhow::Result<String> {
        let config = GlobalConfig::load(&self.dir)?;
        Ok(match config.default_template() {
            Some(name) if self.exists(name) => name.to_string(),
            Some(name) => {
                warn!("default template {name} is not installed, using {DEFAULT_TEMPLATE_NAME}");
                DEFAULT_TEMPLATE_NAME.to_string()
            }
            None => DEFAULT_TEMPLATE_NAME.to_string(),
        })
    }
}

fn not_found(name: &str) -> Error {
    Error::CommandLine(format!("template '{name}' not found"))
}

/// Check that a test template renders valid Go for a sample function
pub fn validate(test_template: &str) -> crate::Result<()> {
    let templates = TemplateSet::with_test(test_template)?;
    let parser = GoParser;
    let generated = Generator::new(&parser, templates).generate(
        &SelectionCriteria::all(),
        SourceText::new(Path::new("funcs.go"), SAMPLE_SOURCE),
        None,
        &[],
    )?;
    normalize(&PruneImports, Path::new("funcs_test.go"), &generated)?;
    Ok(())
}
