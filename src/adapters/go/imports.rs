//! Built-in import normalizer
//!
//! Adds the imports of the candidate pool that a generated file references
//! without importing, removes the imports it does not reference, and
//! rewrites the rest as a single grouped block. Packages outside the pool
//! are never added; a template that needs one must list it in its header,
//! or be paired with `goimports`.

use std::collections::{BTreeSet, HashSet};
use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use tree_sitter::Node;

use super::parser::{import_specs, parse_tree, text};
use crate::core::models::ImportSpec;
use crate::core::ports::ImportNormalizer;
use crate::error::NormalizeError;

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("valid regex"));

/// Reconciles imports with a candidate pool using the tree-sitter Go grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct PruneImports;

impl PruneImports {
    /// Create a normalizer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ImportNormalizer for PruneImports {
    fn normalize(
        &self,
        path: &Path,
        source: &str,
        pool: &[ImportSpec],
    ) -> Result<String, NormalizeError> {
        let tree = parse_tree(source, path)?;
        let root = tree.root_node();

        let mut package_end = 0;
        let mut decls: Vec<Range<usize>> = Vec::new();
        let mut specs: Vec<ImportSpec> = Vec::new();
        let mut cursor = root.walk();
        for node in root.named_children(&mut cursor) {
            match node.kind() {
                "package_clause" => package_end = node.end_byte(),
                "import_declaration" => {
                    decls.push(node.byte_range());
                    specs.extend(import_specs(node, source));
                }
                _ => {}
            }
        }

        let mut used = HashSet::new();
        collect_qualifiers(root, source, &mut used);

        let added = missing_from_pool(&specs, pool, &used);
        if !added.is_empty() {
            debug!("adding {} import(s) from the pool", added.len());
        }
        specs.extend(added);

        let total = specs.len();
        let kept = retain_used(specs, &used);
        debug!("keeping {} of {total} import(s)", kept.len());

        let block = render_block(&kept);
        let rewritten = if decls.is_empty() {
            insert_after(source, package_end, &block)
        } else {
            splice(source, &decls, &block)
        };
        Ok(tidy(&rewritten))
    }
}

/// Every identifier used as a package qualifier (`pkg.Name`)
fn collect_qualifiers(node: Node<'_>, source: &str, used: &mut HashSet<String>) {
    match node.kind() {
        "import_declaration" | "package_clause" => return,
        "qualified_type" => {
            if let Some(pkg) = node.child_by_field_name("package") {
                used.insert(text(pkg, source).to_string());
            }
        }
        "selector_expression" => {
            if let Some(operand) = node.child_by_field_name("operand")
                && operand.kind() == "identifier"
            {
                used.insert(text(operand, source).to_string());
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_qualifiers(child, source, used);
    }
}

/// Pool imports whose package is referenced but not imported yet
fn missing_from_pool(
    imported: &[ImportSpec],
    pool: &[ImportSpec],
    used: &HashSet<String>,
) -> Vec<ImportSpec> {
    let mut known: HashSet<&str> = imported.iter().filter_map(ImportSpec::package_name).collect();
    let mut added = Vec::new();
    for spec in pool {
        let Some(name) = spec.package_name() else {
            continue;
        };
        if matches!(name, "_" | ".") || !used.contains(name) || !known.insert(name) {
            continue;
        }
        added.push(spec.clone());
    }
    added
}

/// Drop unreferenced and duplicate imports
///
/// Blank and dot imports are kept for their side effects, as are imports
/// whose package name cannot be told from the path.
fn retain_used(specs: Vec<ImportSpec>, used: &HashSet<String>) -> Vec<ImportSpec> {
    let mut seen = BTreeSet::new();
    specs
        .into_iter()
        .filter(|spec| seen.insert((spec.alias.clone(), spec.path.clone())))
        .filter(|spec| match spec.package_name() {
            Some("_" | ".") | None => true,
            Some(name) => used.contains(name),
        })
        .collect()
}

fn is_stdlib(path: &str) -> bool {
    path.split('/').next().is_some_and(|first| !first.contains('.'))
}

/// A single import block, standard library first
fn render_block(specs: &[ImportSpec]) -> String {
    if specs.is_empty() {
        return String::new();
    }

    let (mut stdlib, mut other): (Vec<&ImportSpec>, Vec<&ImportSpec>) =
        specs.iter().partition(|spec| is_stdlib(&spec.path));
    stdlib.sort_by(|a, b| a.path.cmp(&b.path));
    other.sort_by(|a, b| a.path.cmp(&b.path));

    let mut block = String::from("import (\n");
    for spec in &stdlib {
        block.push('\t');
        block.push_str(&spec.source);
        block.push('\n');
    }
    if !stdlib.is_empty() && !other.is_empty() {
        block.push('\n');
    }
    for spec in &other {
        block.push('\t');
        block.push_str(&spec.source);
        block.push('\n');
    }
    block.push(')');
    block
}

/// Replace the import declarations with `block`, placed at the first one
fn splice(source: &str, decls: &[Range<usize>], block: &str) -> String {
    let Some(first) = decls.first() else {
        return source.to_string();
    };

    let mut out = String::with_capacity(source.len());
    out.push_str(&source[..first.start]);
    out.push_str(block);

    let mut cursor = first.end;
    for range in &decls[1..] {
        out.push_str(&source[cursor..range.start]);
        cursor = range.end;
    }
    out.push_str(&source[cursor..]);
    out
}

/// Place `block` right after the package clause ending at `at`
fn insert_after(source: &str, at: usize, block: &str) -> String {
    if block.is_empty() {
        return source.to_string();
    }
    format!("{}\n\n{block}\n{}", &source[..at], &source[at..])
}

/// Collapse blank-line runs and end with exactly one newline
fn tidy(source: &str) -> String {
    let mut out = BLANK_RUNS.replace_all(source, "\n\n").trim_end().to_string();
    out.push('\n');
    out
}
