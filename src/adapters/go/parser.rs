//! Go source parser backed by tree-sitter
//!
//! Builds a [`DeclarationTree`] from the concrete syntax tree of one file.
//! Any ERROR or MISSING node rejects the whole file: the tree of an
//! existing test file has to be complete for missing-test resolution to be
//! sound.

use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use crate::core::models::{
    Declaration, DeclarationTree, Field, FunctionDeclaration, ImportSpec, TypeExpr,
};
use crate::core::ports::SourceParser;
use crate::error::ParseError;

/// Tree-sitter based [`SourceParser`] for Go
#[derive(Debug, Clone, Copy, Default)]
pub struct GoParser;

impl GoParser {
    /// Create a parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SourceParser for GoParser {
    fn parse(&self, source: &str, path: &Path) -> Result<DeclarationTree, ParseError> {
        let tree = parse_tree(source, path)?;
        let root = tree.root_node();

        let mut decls = DeclarationTree::default();
        let mut cursor = root.walk();
        for node in root.named_children(&mut cursor) {
            match node.kind() {
                "package_clause" => decls.package = package_of(node, source).unwrap_or_default(),
                "import_declaration" => decls.imports.extend(import_specs(node, source)),
                "function_declaration" | "method_declaration" => {
                    decls.declarations.push(Declaration::Function(function(node, source)));
                }
                "comment" => {}
                _ => decls.declarations.push(Declaration::Other { line: line_of(node) }),
            }
        }

        Ok(decls)
    }

    fn package_name(&self, source: &str) -> Option<String> {
        let tree = syntax_tree(source)?;
        let clause = find_kind(tree.root_node(), "package_clause")?;
        package_of(clause, source)
    }
}

/// Parse `source` and reject it unless it is a syntactically complete file
pub(crate) fn parse_tree(source: &str, path: &Path) -> Result<Tree, ParseError> {
    let tree = syntax_tree(source)
        .ok_or_else(|| ParseError::new(path, 1, 1, "parser produced no syntax tree"))?;
    check(tree.root_node(), source, path)?;
    Ok(tree)
}

fn check(root: Node<'_>, source: &str, path: &Path) -> Result<(), ParseError> {
    if let Some(bad) = first_error(root) {
        let pos = bad.start_position();
        let message = if bad.is_missing() {
            format!("expected '{}'", bad.kind())
        } else {
            format!("syntax error near '{}'", snippet(bad, source))
        };
        return Err(ParseError::new(path, pos.row + 1, pos.column + 1, message));
    }

    let mut cursor = root.walk();
    let first = root
        .named_children(&mut cursor)
        .find(|node| node.kind() != "comment");
    match first {
        Some(node) if node.kind() == "package_clause" => Ok(()),
        Some(node) => {
            let pos = node.start_position();
            Err(ParseError::new(path, pos.row + 1, pos.column + 1, "expected 'package'"))
        }
        None => {
            let pos = root.end_position();
            Err(ParseError::new(
                path,
                pos.row + 1,
                pos.column + 1,
                "expected 'package', found 'EOF'",
            ))
        }
    }
}

/// Source text covered by a node
pub(crate) fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or_default()
}

fn syntax_tree(source: &str) -> Option<Tree> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_go::LANGUAGE.into()).ok()?;
    parser.parse(source, None)
}

/// Depth-first search for the first ERROR or MISSING node
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found
}

/// Depth-first search for the first node of a kind, looking inside ERROR nodes
fn find_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    if node.kind() == kind {
        return Some(node);
    }
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find_map(|child| find_kind(child, kind));
    found
}

fn snippet<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    let full = text(node, source).trim();
    full.lines().next().unwrap_or_default()
}

fn line_of(node: Node<'_>) -> usize {
    node.start_position().row + 1
}

fn package_of(clause: Node<'_>, source: &str) -> Option<String> {
    let mut cursor = clause.walk();
    let ident = clause
        .named_children(&mut cursor)
        .find(|node| node.kind() == "package_identifier")?;
    Some(text(ident, source).to_string())
}

/// Import specs of one `import_declaration`, in source order
pub(crate) fn import_specs(decl: Node<'_>, source: &str) -> Vec<ImportSpec> {
    let mut specs = Vec::new();
    let mut cursor = decl.walk();
    for child in decl.named_children(&mut cursor) {
        match child.kind() {
            "import_spec" => specs.extend(import_spec(child, source)),
            "import_spec_list" => {
                let mut inner = child.walk();
                specs.extend(
                    child
                        .named_children(&mut inner)
                        .filter(|node| node.kind() == "import_spec")
                        .filter_map(|node| import_spec(node, source)),
                );
            }
            _ => {}
        }
    }
    specs
}

fn import_spec(node: Node<'_>, source: &str) -> Option<ImportSpec> {
    let path = node.child_by_field_name("path")?;
    let quoted = text(path, source);
    Some(ImportSpec {
        alias: node
            .child_by_field_name("name")
            .map(|name| text(name, source).to_string()),
        path: quoted.trim_matches(|c| c == '"' || c == '`').to_string(),
        source: text(node, source).to_string(),
    })
}

fn function(node: Node<'_>, source: &str) -> FunctionDeclaration {
    let name = node
        .child_by_field_name("name")
        .map_or("", |name| text(name, source));
    let mut decl = FunctionDeclaration::new(name, line_of(node));

    if let Some(receiver) = node.child_by_field_name("receiver") {
        decl.receiver = fields(receiver, source);
    }
    if let Some(params) = node.child_by_field_name("parameters") {
        decl.params = fields(params, source);
    }
    if let Some(result) = node.child_by_field_name("result") {
        decl.results = if result.kind() == "parameter_list" {
            fields(result, source)
        } else {
            vec![Field::anonymous(text(result, source))]
        };
    }

    decl
}

/// Entries of a `parameter_list`, grouping preserved
fn fields(list: Node<'_>, source: &str) -> Vec<Field> {
    let mut cursor = list.walk();
    list.named_children(&mut cursor)
        .filter_map(|node| match node.kind() {
            "parameter_declaration" => Some(field(node, source)),
            "variadic_parameter_declaration" => Some(field(node, source).into_variadic()),
            _ => None,
        })
        .collect()
}

fn field(node: Node<'_>, source: &str) -> Field {
    let ty = node
        .child_by_field_name("type")
        .map_or_else(|| TypeExpr::new(""), |ty| TypeExpr::new(text(ty, source)));

    let mut cursor = node.walk();
    let names: Vec<&str> = node
        .children_by_field_name("name", &mut cursor)
        .map(|name| text(name, source))
        .collect();

    if names.is_empty() {
        Field::anonymous(ty)
    } else {
        Field::named(names, ty)
    }
}
