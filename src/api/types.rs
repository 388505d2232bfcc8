//! Request and response types of the JSON transport
//!
//! Field names follow the wire format (`camelCase`).

use serde::{Deserialize, Serialize};

use crate::core::models::SelectionCriteria;

/// One generation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Name the input source is reported under
    #[serde(default)]
    pub input_file_path: String,
    /// Name of the test file; derived from the input when empty
    #[serde(default)]
    pub output_file_path: String,
    /// Source text of the tested file
    #[serde(default)]
    pub input_file: String,
    /// Current test file text; empty means no existing test file
    #[serde(default)]
    pub output_file: String,
    /// Text for the test-case placeholder
    #[serde(default)]
    pub comment: String,
    /// 1-based lines of the `func` keywords to generate for
    #[serde(default)]
    pub lines: Vec<usize>,
    /// Names of the functions to generate for
    #[serde(default)]
    pub functions: Vec<String>,
    /// Generate for every function
    #[serde(default)]
    pub all: bool,
}

impl GenerateRequest {
    /// Selection described by the request; everything when nothing is named
    #[must_use]
    pub fn criteria(&self) -> SelectionCriteria {
        SelectionCriteria::lines(self.lines.iter().copied())
            .with_names(self.functions.iter().cloned())
            .with_all(self.all)
            .or_all()
    }
}

/// Answer to one [`GenerateRequest`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Full new test file, empty when nothing was generated
    pub generated_code: String,
}
