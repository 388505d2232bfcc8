//! End-to-end generation over in-memory sources

use std::path::Path;

use gounit::Error;
use gounit::adapters::GoParser;
use gounit::core::models::SelectionCriteria;
use gounit::core::services::{Generator, SourceText};
use gounit::template::TemplateSet;

use crate::common::{CALC_SRC, COPY_SRC, READER_SRC, generate, test_functions};

#[test]
fn test_single_function_by_name() {
    let out = generate(CALC_SRC, None, &SelectionCriteria::names(["Add"])).unwrap();

    assert!(out.starts_with("package calc\n"));
    assert_eq!(test_functions(&out), ["TestAdd"]);
    assert!(out.contains("type args struct"));
    assert!(out.contains("tArgs.a, tArgs.b"));
    assert!(out.contains("want1 int"));
    assert!(!out.contains("wantErr"));
    assert!(!out.contains("\"strings\""));
}

#[test]
fn test_already_covered_yields_nothing() {
    let existing = "package calc\n\nimport \"testing\"\n\nfunc TestAdd(t *testing.T) {}\n";
    let out = generate(CALC_SRC, Some(existing), &SelectionCriteria::names(["Add"])).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_method_with_error_result() {
    let out = generate(READER_SRC, None, &SelectionCriteria::lines([5])).unwrap();

    assert!(out.contains("func TestReaderRead(t *testing.T)"));
    assert!(out.contains("init    func(t *testing.T) *Reader"));
    assert!(out.contains("inspect func(r *Reader, t *testing.T)"));
    assert!(out.contains("p []byte"));
    assert!(out.contains("want1 int"));
    assert!(out.contains("wantErr    bool"));
    assert!(out.contains("inspectErr func(err error, t *testing.T)"));
    assert!(out.contains("got1, err := receiver.Read(tArgs.p)"));
}

#[test]
fn test_variadic_parameter_is_spread() {
    let out = generate(CALC_SRC, None, &SelectionCriteria::names(["Sum"])).unwrap();

    assert!(out.contains("nums []int"));
    assert!(out.contains("Sum(tArgs.nums...)"));
}

#[test]
fn test_unexported_function_name() {
    let out = generate(CALC_SRC, None, &SelectionCriteria::names(["parse"])).unwrap();
    assert_eq!(test_functions(&out), ["Test_parse"]);
}

#[test]
fn test_no_match_is_function_not_found() {
    for criteria in [
        SelectionCriteria::lines([999]),
        SelectionCriteria::names(["Missing"]),
        SelectionCriteria::default(),
    ] {
        let result = generate(CALC_SRC, None, &criteria);
        assert!(matches!(result, Err(Error::FuncNotFound)), "{criteria:?}");
    }
}

#[test]
fn test_broken_existing_test_is_reported() {
    let result = generate(CALC_SRC, Some("package calc\n\nfunc TestAdd( {\n"), &SelectionCriteria::all());

    match result {
        Err(Error::ParseOutput(err)) => assert_eq!(err.path, Path::new("calc_test.go")),
        other => panic!("expected output parse error, got {other:?}"),
    }
}

#[test]
fn test_broken_source_is_reported() {
    let result = generate("package calc\n\nfunc Add(", None, &SelectionCriteria::all());
    assert!(matches!(result, Err(Error::ParseInput(_))));
}

#[test]
fn test_appends_only_missing_tests() {
    let first = generate(CALC_SRC, None, &SelectionCriteria::names(["Add"])).unwrap();
    let second = generate(CALC_SRC, Some(first.as_str()), &SelectionCriteria::all()).unwrap();

    assert!(second.starts_with(&first));
    assert_eq!(test_functions(&second), ["TestAdd", "TestSum", "Test_parse"]);
    assert_eq!(second.matches("package calc").count(), 1);
}

#[test]
fn test_regeneration_is_idempotent() {
    let first = generate(CALC_SRC, None, &SelectionCriteria::all()).unwrap();
    let again = generate(CALC_SRC, Some(first.as_str()), &SelectionCriteria::all()).unwrap();
    assert!(again.is_empty());
}

#[test]
fn test_output_is_deterministic() {
    let a = generate(CALC_SRC, None, &SelectionCriteria::all()).unwrap();
    let b = generate(CALC_SRC, None, &SelectionCriteria::all()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_sibling_tests_are_honoured() {
    let sibling = "package calc_test\n\nimport \"testing\"\n\nfunc TestSum(t *testing.T) {}\n";
    let generated = Generator::new(&GoParser, TemplateSet::builtin())
        .generate(
            &SelectionCriteria::all(),
            SourceText::new(Path::new("calc.go"), CALC_SRC),
            None,
            &[SourceText::new(Path::new("sum_test.go"), sibling)],
        )
        .unwrap();

    assert_eq!(generated.tests, ["TestAdd", "Test_parse"]);
    assert_eq!(generated.package, "calc");
}

#[test]
fn test_comment_fills_placeholder() {
    let generated = Generator::new(&GoParser, TemplateSet::builtin())
        .with_comment("cover the zero value")
        .generate(
            &SelectionCriteria::names(["Add"]),
            SourceText::new(Path::new("calc.go"), CALC_SRC),
            None,
            &[],
        )
        .unwrap();

    assert!(generated.code.contains("//cover the zero value"));
    assert!(!generated.code.contains("TODO"));
}

#[test]
fn test_existing_package_wins() {
    let existing = "package calc_test\n\nimport \"testing\"\n\nfunc TestAdd(t *testing.T) {}\n";
    let generated = Generator::new(&GoParser, TemplateSet::builtin())
        .generate(
            &SelectionCriteria::all(),
            SourceText::new(Path::new("calc.go"), CALC_SRC),
            Some(SourceText::new(Path::new("calc_test.go"), existing)),
            &[],
        )
        .unwrap();

    assert_eq!(generated.package, "calc_test");
    assert!(generated.code.starts_with(existing));
}

#[test]
fn test_append_adds_imports_the_new_tests_need() {
    let existing = "package calc\n\nimport \"testing\"\n\nfunc TestOther(t *testing.T) {}\n";
    let out = generate(COPY_SRC, Some(existing), &SelectionCriteria::all()).unwrap();

    assert!(out.contains("reflect.DeepEqual"));
    assert!(out.contains("import (\n\t\"io\"\n\t\"reflect\"\n\t\"testing\"\n)\n"));
    assert_eq!(test_functions(&out), ["TestOther", "TestAdd", "TestCopy"]);
}

#[test]
fn test_append_to_file_without_imports() {
    let existing = "package calc\n";
    let out = generate(CALC_SRC, Some(existing), &SelectionCriteria::names(["Add"])).unwrap();

    assert!(out.starts_with("package calc\n\nimport (\n\t\"reflect\"\n\t\"testing\"\n)\n"));
}
