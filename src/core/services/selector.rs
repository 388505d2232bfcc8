//! Function selector - finds declarations matching a selection
//!
//! Pure traversal with no I/O dependencies.

use crate::core::models::{DeclarationTree, FunctionDeclaration, SelectionCriteria};

/// Every function declaration satisfying `predicate`, in source order
pub fn match_all<'a, P>(tree: &'a DeclarationTree, predicate: P) -> Vec<&'a FunctionDeclaration>
where
    P: Fn(&FunctionDeclaration) -> bool,
{
    tree.functions().filter(|decl| predicate(decl)).collect()
}

/// Declarations matching the criteria, in source order
///
/// A declaration qualifying both by line and by name appears once. Empty
/// criteria select nothing.
#[must_use]
pub fn select<'a>(
    tree: &'a DeclarationTree,
    criteria: &SelectionCriteria,
) -> Vec<&'a FunctionDeclaration> {
    match_all(tree, |decl| criteria.matches(decl))
}
