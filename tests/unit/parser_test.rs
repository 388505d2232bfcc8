//! Go parser and import normalizer over realistic files

use std::path::Path;

use gounit::adapters::{GoParser, PruneImports};
use gounit::core::models::{Declaration, SignatureView};
use gounit::core::ports::{ImportNormalizer, SourceParser};

use crate::common::{CALC_SRC, READER_SRC};

#[test]
fn test_calc_declarations() {
    let tree = GoParser.parse(CALC_SRC, Path::new("calc.go")).unwrap();

    assert_eq!(tree.package, "calc");
    assert_eq!(tree.imports.len(), 1);
    let names: Vec<_> = tree.functions().map(|f| (f.name.as_str(), f.line)).collect();
    assert_eq!(names, [("Add", 5), ("Sum", 9), ("parse", 17)]);
}

#[test]
fn test_reader_view() {
    let tree = GoParser.parse(READER_SRC, Path::new("reader.go")).unwrap();
    let read = tree.functions().next().unwrap();
    let view = SignatureView::new(read);

    assert_eq!(view.test_name, "TestReaderRead");
    assert_eq!(view.receiver_name, "Reader");
    assert!(view.returns_error);
    assert_eq!(view.result_names, ["got1", "err"]);
    assert_eq!(view.non_error_results, ["got1"]);
}

#[test]
fn test_generic_receiver() {
    let src = "package list\n\ntype List[T any] struct{}\n\nfunc (l *List[T]) Len() int { return 0 }\n";
    let tree = GoParser.parse(src, Path::new("list.go")).unwrap();
    let view = SignatureView::new(tree.functions().next().unwrap());

    assert_eq!(view.receiver_name, "List");
    assert_eq!(view.test_name, "TestListLen");
}

#[test]
fn test_anonymous_params_are_skipped() {
    let src = "package h\n\nfunc Handle(int, string) {}\n";
    let tree = GoParser.parse(src, Path::new("h.go")).unwrap();
    let view = SignatureView::new(tree.functions().next().unwrap());

    assert!(view.params.is_empty());
    assert_eq!(view.num_params, 2);
}

#[test]
fn test_non_function_declarations_keep_lines() {
    let tree = GoParser.parse(READER_SRC, Path::new("reader.go")).unwrap();
    assert_eq!(tree.declarations[0], Declaration::Other { line: 3 });
}

#[test]
fn test_prune_keeps_referenced_third_party_import() {
    let src = "package calc\n\nimport (\n\t\"testing\"\n\n\t\"github.com/stretchr/testify/assert\"\n\t\"github.com/x/unused\"\n)\n\nfunc TestAdd(t *testing.T) {\n\tassert.True(t, true)\n}\n";
    let out = PruneImports.normalize(Path::new("calc_test.go"), src, &[]).unwrap();

    assert!(out.contains("\"github.com/stretchr/testify/assert\""));
    assert!(!out.contains("github.com/x/unused"));
}

#[test]
fn test_prune_is_stable() {
    let src = "package calc\n\nimport (\n\t\"testing\"\n)\n\nfunc TestAdd(t *testing.T) {}\n";
    let once = PruneImports.normalize(Path::new("calc_test.go"), src, &[]).unwrap();
    let twice = PruneImports.normalize(Path::new("calc_test.go"), &once, &[]).unwrap();
    assert_eq!(once, twice);
}
