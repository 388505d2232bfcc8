//! Missing-test resolver - drops candidates that already have a test
//!
//! A candidate counts as tested when any supplied test tree declares a free
//! function named after the candidate's computed test name. Methods never
//! count, whatever their name.

use std::collections::BTreeSet;

use crate::core::models::{DeclarationTree, SignatureView};

/// Names of the free functions declared across existing test sources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestIndex {
    names: BTreeSet<String>,
}

impl TestIndex {
    /// An index with no tests
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the free functions of one test tree
    pub fn extend_from(&mut self, tree: &DeclarationTree) {
        self.names.extend(
            tree.functions()
                .filter(|decl| !decl.is_method())
                .map(|decl| decl.name.clone()),
        );
    }

    /// Whether a test with this name exists
    #[must_use]
    pub fn contains(&self, test_name: &str) -> bool {
        self.names.contains(test_name)
    }

    /// Whether the candidate already has a test
    #[must_use]
    pub fn covers(&self, candidate: &SignatureView) -> bool {
        self.contains(&candidate.test_name)
    }

    /// Number of indexed names
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Index every supplied test tree
pub fn build_test_index<'a>(trees: impl IntoIterator<Item = &'a DeclarationTree>) -> TestIndex {
    let mut index = TestIndex::new();
    for tree in trees {
        index.extend_from(tree);
    }
    index
}

/// Candidates without a test, in their original order
#[must_use]
pub fn filter_missing(candidates: Vec<SignatureView>, index: &TestIndex) -> Vec<SignatureView> {
    candidates.into_iter().filter(|c| !index.covers(c)).collect()
}
