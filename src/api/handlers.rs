//! Transport-agnostic request handler
//!
//! The caller supplies the source and the current test file as texts and
//! receives the normalized new test file. The only file access is the scan
//! for sibling test sources next to the output path.

use std::path::{Path, PathBuf};

use log::debug;

use crate::core::ports::{ImportNormalizer, SourceParser};
use crate::core::services::{Generator, SourceText, normalize};
use crate::discovery::{SiblingFile, find_siblings};
use crate::error::Result;
use crate::paths;
use crate::template::TemplateSet;

use super::types::{GenerateRequest, GenerateResponse};

/// Serves [`GenerateRequest`]s with a fixed set of collaborators
pub struct Handler<'a> {
    parser: &'a dyn SourceParser,
    normalizer: &'a dyn ImportNormalizer,
    templates: TemplateSet,
}

impl std::fmt::Debug for Handler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler")
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}

impl<'a> Handler<'a> {
    /// Create a handler
    pub fn new(
        parser: &'a dyn SourceParser,
        normalizer: &'a dyn ImportNormalizer,
        templates: TemplateSet,
    ) -> Self {
        Self {
            parser,
            normalizer,
            templates,
        }
    }

    /// Generate the new test file for one request
    pub fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let input = PathBuf::from(&request.input_file_path);
        let output = if request.output_file_path.is_empty() {
            paths::default_output(&input)
        } else {
            PathBuf::from(&request.output_file_path)
        };
        debug!("request for {} -> {}", input.display(), output.display());

        let package = self.parser.package_name(&request.input_file).unwrap_or_default();
        let siblings = find_siblings(self.parser, &output, &package)?;
        let sibling_sources: Vec<SourceText<'_>> = siblings.iter().map(SiblingFile::as_source).collect();

        let existing = existing_test(&output, &request.output_file);
        let generated = Generator::new(self.parser, self.templates.clone())
            .with_comment(request.comment.as_str())
            .generate(
                &request.criteria(),
                SourceText::new(&input, &request.input_file),
                existing,
                &sibling_sources,
            )?;

        Ok(GenerateResponse {
            generated_code: normalize(self.normalizer, &output, &generated)?,
        })
    }
}

fn existing_test<'t>(path: &'t Path, text: &'t str) -> Option<SourceText<'t>> {
    (!text.is_empty()).then(|| SourceText::new(path, text))
}
