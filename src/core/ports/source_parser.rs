//! Source parser port
//!
//! Defines the interface for turning raw source text into a declaration
//! tree.

use std::path::Path;

use crate::core::models::DeclarationTree;
use crate::error::ParseError;

/// Parser for one source language
///
/// Implementations must reject text with any syntax error: missing-test
/// resolution relies on reading every declaration of an existing test file.
#[cfg_attr(test, mockall::automock)]
pub trait SourceParser: Send + Sync {
    /// Parse a complete source file
    fn parse(&self, source: &str, path: &Path) -> Result<DeclarationTree, ParseError>;

    /// Read only the package clause, tolerating errors elsewhere in the file
    fn package_name(&self, source: &str) -> Option<String>;
}
