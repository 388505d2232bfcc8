//! Shared fixtures for unit tests

use std::path::Path;

use gounit::adapters::{GoParser, PruneImports};
use gounit::core::models::SelectionCriteria;
use gounit::core::services::{Generator, SourceText, normalize};
use gounit::template::TemplateSet;

/// A small package with free functions
pub const CALC_SRC: &str = "package calc

import \"strings\"

func Add(a, b int) int {
\treturn a + b
}

func Sum(nums ...int) int {
\ttotal := 0
\tfor _, n := range nums {
\t\ttotal += n
\t}
\treturn total
}

func parse(s string) (int, error) {
\treturn len(strings.TrimSpace(s)), nil
}
";

/// A package with a method returning an error
pub const READER_SRC: &str = "package io

type Reader struct{}

func (r *Reader) Read(p []byte) (n int, err error) {
\treturn 0, nil
}
";

/// A source whose functions need imports a bare test file lacks
pub const COPY_SRC: &str = "package calc

import \"io\"

func Add(a, b int) int {
\treturn a + b
}

func Copy(r io.Reader) int {
\treturn 0
}
";

/// Run a generation over in-memory texts and normalize the result
pub fn generate(
    source: &str,
    existing: Option<&str>,
    criteria: &SelectionCriteria,
) -> gounit::Result<String> {
    let generated = Generator::new(&GoParser, TemplateSet::builtin()).generate(
        criteria,
        SourceText::new(Path::new("calc.go"), source),
        existing.map(|text| SourceText::new(Path::new("calc_test.go"), text)),
        &[],
    )?;
    normalize(&PruneImports, Path::new("calc_test.go"), &generated)
}

/// Names of the free functions declared in Go source
pub fn test_functions(source: &str) -> Vec<String> {
    use gounit::core::ports::SourceParser;

    GoParser
        .parse(source, Path::new("calc_test.go"))
        .map(|tree| {
            tree.functions()
                .filter(|f| !f.is_method())
                .map(|f| f.name.clone())
                .collect()
        })
        .unwrap_or_default()
}
