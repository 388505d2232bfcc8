//! Selection criteria
//!
//! Which declarations a generation run targets: by line, by name, or all.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::FunctionDeclaration;

/// Name that selects every declaration when given as a function name
pub const SELECT_ALL_NAME: &str = "*";

static FUNCTION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z_][a-zA-Z0-9]*|\*)$").expect("valid regex"));

/// Parse one line number of a comma-separated list
pub fn parse_line(chunk: &str) -> Result<usize, String> {
    chunk
        .trim()
        .parse()
        .map_err(|_| format!("expected unsigned int, got: {chunk}"))
}

/// Parse a comma-separated list of line numbers; blank input is empty
pub fn parse_lines(text: &str) -> Result<Vec<usize>, String> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',').map(parse_line).collect()
}

/// Validate one function name of a comma-separated list
pub fn parse_function_name(chunk: &str) -> Result<String, String> {
    let name = chunk.trim();
    if FUNCTION_NAME.is_match(name) {
        Ok(name.to_string())
    } else {
        Err(format!("bad function name: {name}"))
    }
}

/// A union of line numbers, function names and an "all" flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCriteria {
    /// 1-based lines of `func` keywords
    #[serde(default)]
    pub lines: BTreeSet<usize>,
    /// Declared function or method names
    #[serde(default)]
    pub names: BTreeSet<String>,
    /// Select every declaration
    #[serde(default)]
    pub all: bool,
}

impl SelectionCriteria {
    /// Criteria selecting every declaration
    #[must_use]
    pub fn all() -> Self {
        Self {
            all: true,
            ..Self::default()
        }
    }

    /// Criteria selecting the given lines
    pub fn lines(lines: impl IntoIterator<Item = usize>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Criteria selecting the given names
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().with_names(names)
    }

    /// Add names to the selection; `*` turns on "all"
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if name == SELECT_ALL_NAME {
                self.all = true;
            } else {
                self.names.insert(name);
            }
        }
        self
    }

    /// Whether nothing can possibly match
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.all && self.lines.is_empty() && self.names.is_empty()
    }

    /// Turn on "all" when `all` is set
    #[must_use]
    pub const fn with_all(mut self, all: bool) -> Self {
        self.all |= all;
        self
    }

    /// Select everything when nothing was asked for explicitly
    #[must_use]
    pub fn or_all(self) -> Self {
        if self.is_empty() { Self::all() } else { self }
    }

    /// Whether a declaration qualifies
    #[must_use]
    pub fn matches(&self, decl: &FunctionDeclaration) -> bool {
        self.all || self.lines.contains(&decl.line) || self.names.contains(&decl.name)
    }
}
