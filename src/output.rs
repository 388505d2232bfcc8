//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Generated code itself is
//! never routed through here.

use colored::Colorize;
use serde::Serialize;

use crate::storage::TemplateEntry;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a `gen` run that wrote a file
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    /// The test file
    pub output: String,
    /// Test functions added, in order
    pub tests: Vec<String>,
}

/// Result of `template list`
#[derive(Debug, Serialize)]
pub struct TemplateListResult {
    /// Templates, built-in first
    pub templates: Vec<TemplateInfo>,
}

/// One listed template
#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    /// Template name
    pub name: String,
    /// Whether `gen` uses it by default
    pub default: bool,
}

impl From<TemplateEntry> for TemplateInfo {
    fn from(entry: TemplateEntry) -> Self {
        Self {
            name: entry.name,
            default: entry.is_default,
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl GenerateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.tests.is_empty() {
            println!("No missing tests in {}.", self.output);
            return;
        }

        println!("Generated {} test(s) in {}:", self.tests.len(), self.output);
        for name in &self.tests {
            println!("  {}", name.green());
        }
    }
}

impl TemplateListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        for t in &self.templates {
            if t.default {
                println!("* {} {}", t.name.bold(), "(default)".green());
            } else {
                println!("  {}", t.name);
            }
        }
    }
}

impl OperationResult {
    /// Successful operation with a message
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
