//! Generator - composes parsing, selection, missing-test resolution and
//! rendering into one run
//!
//! ```text
//! Parsed -> Selected -> Filtered -> Rendered -> Done
//!              |            |
//!              |            +-> Done(empty)   every candidate has a test
//!              +-> FuncNotFound               nothing matched the selection
//! ```
//!
//! The produced buffer is not final: a new file still carries every import
//! of the tested file, and an appended one may lack imports the new tests
//! need. It must go through an [`ImportNormalizer`], fed with
//! [`Generated::imports`], before it is persisted.

use std::path::Path;

use log::debug;

use crate::core::models::{DeclarationTree, ImportSpec, SelectionCriteria, SignatureView};
use crate::core::ports::{ImportNormalizer, SourceParser};
use crate::core::services::{build_test_index, filter_missing, select};
use crate::error::{Error, Result};
use crate::template::{TEMPLATE_IMPORTS, TemplateSet};

/// Source text and the file name it is reported under
#[derive(Debug, Clone, Copy)]
pub struct SourceText<'a> {
    /// File name used in error messages
    pub path: &'a Path,
    /// Complete file contents
    pub text: &'a str,
}

impl<'a> SourceText<'a> {
    /// Pair a text with its file name
    pub const fn new(path: &'a Path, text: &'a str) -> Self {
        Self { path, text }
    }
}

/// Result of one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    /// Full new file contents, empty when nothing was generated
    pub code: String,
    /// Names of the test functions rendered, in order
    pub tests: Vec<String>,
    /// Package clause of the destination file
    pub package: String,
    /// Imports the generated tests may reference
    pub imports: Vec<ImportSpec>,
}

impl Generated {
    /// Whether every selected function already had a test
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

/// Test stub generator
pub struct Generator<'p> {
    parser: &'p dyn SourceParser,
    templates: TemplateSet,
    comment: String,
}

impl std::fmt::Debug for Generator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("templates", &self.templates)
            .field("comment", &self.comment)
            .finish_non_exhaustive()
    }
}

impl<'p> Generator<'p> {
    /// Create a generator over a parser and a template set
    pub fn new(parser: &'p dyn SourceParser, templates: TemplateSet) -> Self {
        Self {
            parser,
            templates,
            comment: String::new(),
        }
    }

    /// Text placed in the test-case placeholder of every generated test
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Generate tests for the selected declarations of `source`
    ///
    /// `existing` is the current content of the destination file; when
    /// present the result starts with it and no header is rendered.
    /// `siblings` are the other test files of the package. Both are only
    /// consulted to skip declarations that already have a test.
    pub fn generate(
        &self,
        criteria: &SelectionCriteria,
        source: SourceText<'_>,
        existing: Option<SourceText<'_>>,
        siblings: &[SourceText<'_>],
    ) -> Result<Generated> {
        let tree = self.parser.parse(source.text, source.path).map_err(Error::ParseInput)?;
        debug!(
            "parsed {}: package {}, {} declaration(s)",
            source.path.display(),
            tree.package,
            tree.declarations.len()
        );

        let candidates: Vec<SignatureView> =
            select(&tree, criteria).into_iter().map(SignatureView::new).collect();
        if candidates.is_empty() {
            return Err(Error::FuncNotFound);
        }
        debug!("selected {} candidate(s)", candidates.len());

        let mut buffer = String::new();
        let mut package = tree.package.clone();
        let mut test_trees: Vec<DeclarationTree> = Vec::with_capacity(siblings.len() + 1);

        if let Some(existing) = existing {
            buffer.push_str(existing.text);
            let test_tree =
                self.parser.parse(existing.text, existing.path).map_err(Error::ParseOutput)?;
            package.clone_from(&test_tree.package);
            test_trees.push(test_tree);
        }

        for sibling in siblings {
            test_trees.push(self.parser.parse(sibling.text, sibling.path).map_err(Error::ParseOutput)?);
        }

        let index = build_test_index(&test_trees);
        debug!("{} existing test(s) indexed", index.len());
        let total = candidates.len();
        let missing = filter_missing(candidates, &index);
        debug!("{} of {total} candidate(s) already tested", total - missing.len());

        if missing.is_empty() {
            return Ok(Generated {
                package,
                ..Generated::default()
            });
        }
        let imports = import_pool(&tree.imports);

        let renderer = self.templates.renderer()?;
        if buffer.is_empty() {
            buffer.push_str(&renderer.render_header(&package, &tree.imports)?);
        }

        let mut tests = Vec::with_capacity(missing.len());
        for view in &missing {
            buffer.push_str(&renderer.render_test(view, &self.comment)?);
            tests.push(view.test_name.clone());
        }
        debug!("rendered {} test(s)", tests.len());

        Ok(Generated {
            code: buffer,
            tests,
            package,
            imports,
        })
    }
}

/// Template imports followed by the imports of the tested file
fn import_pool(source: &[ImportSpec]) -> Vec<ImportSpec> {
    TEMPLATE_IMPORTS
        .iter()
        .map(|path| ImportSpec::new(*path))
        .chain(source.iter().cloned())
        .collect()
}

/// Run the import normalizer over a generated buffer
///
/// An empty result stays empty: there is nothing to persist.
pub fn normalize(
    normalizer: &dyn ImportNormalizer,
    output: &Path,
    generated: &Generated,
) -> Result<String> {
    if generated.is_empty() {
        return Ok(String::new());
    }
    normalizer
        .normalize(output, &generated.code, &generated.imports)
        .map_err(Error::FixImports)
}
