//! Property tests for declaration selection

use proptest::prelude::*;

use gounit::core::models::{DeclarationTree, FunctionDeclaration, SelectionCriteria, parse_lines};
use gounit::core::services::select;

fn tree(names: &[String]) -> DeclarationTree {
    names
        .iter()
        .enumerate()
        .fold(DeclarationTree::new("p"), |tree, (i, name)| {
            tree.with_function(FunctionDeclaration::new(name.clone(), i * 4 + 3))
        })
}

fn selected(tree: &DeclarationTree, criteria: &SelectionCriteria) -> Vec<usize> {
    select(tree, criteria).into_iter().map(|decl| decl.line).collect()
}

proptest! {
    #[test]
    fn selection_is_a_union(
        names in prop::collection::vec("[A-Za-z][a-z0-9]{0,6}", 1..8),
        lines in prop::collection::btree_set(1usize..40, 0..5),
        picked in prop::collection::btree_set("[A-Za-z][a-z0-9]{0,6}", 0..4),
    ) {
        let tree = tree(&names);
        let by_lines = SelectionCriteria::lines(lines.iter().copied());
        let by_names = SelectionCriteria::names(picked.iter().cloned());
        let both = by_lines.clone().with_names(picked.iter().cloned());

        let union: Vec<usize> = tree
            .functions()
            .filter(|decl| by_lines.matches(decl) || by_names.matches(decl))
            .map(|decl| decl.line)
            .collect();
        prop_assert_eq!(selected(&tree, &both), union);
    }

    #[test]
    fn all_selects_everything_in_order(names in prop::collection::vec("[a-z]{1,6}", 0..8)) {
        let tree = tree(&names);
        let expected: Vec<usize> = (0..names.len()).map(|i| i * 4 + 3).collect();
        prop_assert_eq!(selected(&tree, &SelectionCriteria::all()), expected);
    }

    #[test]
    fn line_lists_parse_back(lines in prop::collection::vec(0usize..100_000, 1..10)) {
        let text = lines.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
        prop_assert_eq!(parse_lines(&text).unwrap(), lines);
    }

    #[test]
    fn non_numeric_chunks_are_rejected(word in "[a-z]{1,5}") {
        let err = parse_lines(&format!("1,{word}")).unwrap_err();
        prop_assert_eq!(err, format!("expected unsigned int, got: {word}"));
    }
}
