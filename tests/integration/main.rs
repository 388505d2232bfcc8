//! Integration tests for the gounit CLI
//!
//! Each test runs the binary against a temporary Go package with its own
//! config directory, so installed templates never leak between tests.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CALC_SRC: &str = "package calc

func Add(a, b int) int {
\treturn a + b
}

func (c *Calc) Reset() error {
\treturn nil
}

type Calc struct{}
";

/// Helper function to create a gounit command with an isolated config dir
fn gounit(config: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("gounit"));
    cmd.env("GOUNIT_CONFIG_DIR", config).env("NO_COLOR", "1");
    cmd
}

/// Temp dir holding `calc/calc.go` and an empty config dir
fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("calc")).unwrap();
    fs::create_dir_all(temp.path().join("config")).unwrap();
    fs::write(temp.path().join("calc/calc.go"), CALC_SRC).unwrap();
    temp
}

// =============================================================================
// GEN
// =============================================================================

#[test]
fn test_gen_writes_test_file() {
    let temp = setup();
    let input = temp.path().join("calc/calc.go");

    gounit(&temp.path().join("config"))
        .args(["gen", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("TestAdd"))
        .stdout(predicate::str::contains("TestCalcReset"));

    let written = fs::read_to_string(temp.path().join("calc/calc_test.go")).unwrap();
    assert!(written.starts_with("package calc\n"));
    assert!(written.contains("func TestAdd(t *testing.T)"));
    assert!(written.contains("func TestCalcReset(t *testing.T)"));
}

#[test]
fn test_gen_twice_changes_nothing() {
    let temp = setup();
    let input = temp.path().join("calc/calc.go");
    let output = temp.path().join("calc/calc_test.go");

    gounit(&temp.path().join("config")).args(["gen", "-i"]).arg(&input).assert().success();
    let first = fs::read_to_string(&output).unwrap();

    gounit(&temp.path().join("config"))
        .args(["gen", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("No missing tests"));
    assert_eq!(fs::read_to_string(&output).unwrap(), first);
}

#[test]
fn test_gen_appends_to_existing_file() {
    let temp = setup();
    let input = temp.path().join("calc/calc.go");
    let output = temp.path().join("calc/calc_test.go");

    gounit(&temp.path().join("config"))
        .args(["gen", "-f", "Add", "-i"])
        .arg(&input)
        .assert()
        .success();
    gounit(&temp.path().join("config"))
        .args(["gen", "-l", "7", "-i"])
        .arg(&input)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.matches("package calc").count(), 1);
    assert_eq!(written.matches("func TestAdd(").count(), 1);
    assert_eq!(written.matches("func TestCalcReset(").count(), 1);
}

#[test]
fn test_gen_appends_missing_imports() {
    let temp = setup();
    let output = temp.path().join("calc/calc_test.go");
    fs::write(
        &output,
        "package calc\n\nimport \"testing\"\n\nfunc TestOther(t *testing.T) {}\n",
    )
    .unwrap();

    gounit(&temp.path().join("config"))
        .args(["gen", "-f", "Add", "-i"])
        .arg(temp.path().join("calc/calc.go"))
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("import (\n\t\"reflect\"\n\t\"testing\"\n)\n"));
    assert!(written.contains("func TestOther(t *testing.T) {}"));
    assert!(written.contains("func TestAdd(t *testing.T)"));
}

#[test]
fn test_gen_to_stdout_leaves_disk_alone() {
    let temp = setup();

    gounit(&temp.path().join("config"))
        .args(["gen", "--stdout", "-f", "Add", "-i"])
        .arg(temp.path().join("calc/calc.go"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("package calc"))
        .stdout(predicate::str::contains("func TestAdd(t *testing.T)"))
        .stdout(predicate::str::contains("TestCalcReset").not());

    assert!(!temp.path().join("calc/calc_test.go").exists());
}

#[test]
fn test_gen_skips_functions_tested_in_sibling() {
    let temp = setup();
    fs::write(
        temp.path().join("calc/add_test.go"),
        "package calc\n\nimport \"testing\"\n\nfunc TestAdd(t *testing.T) {}\n",
    )
    .unwrap();

    gounit(&temp.path().join("config"))
        .args(["gen", "--stdout", "-i"])
        .arg(temp.path().join("calc/calc.go"))
        .assert()
        .success()
        .stdout(predicate::str::contains("func TestAdd(").not())
        .stdout(predicate::str::contains("func TestCalcReset("));
}

#[test]
fn test_gen_unknown_function() {
    let temp = setup();

    gounit(&temp.path().join("config"))
        .args(["gen", "-f", "Nope", "-i"])
        .arg(temp.path().join("calc/calc.go"))
        .assert()
        .code(6)
        .stderr(predicate::str::contains("unable to find a function declaration"));
}

#[test]
fn test_gen_missing_input() {
    let temp = setup();

    gounit(&temp.path().join("config"))
        .args(["gen", "-i"])
        .arg(temp.path().join("calc/missing.go"))
        .assert()
        .code(14);
}

#[test]
fn test_gen_broken_existing_test() {
    let temp = setup();
    fs::write(temp.path().join("calc/calc_test.go"), "package calc\n\nfunc TestAdd( {\n").unwrap();

    gounit(&temp.path().join("config"))
        .args(["gen", "-i"])
        .arg(temp.path().join("calc/calc.go"))
        .assert()
        .code(10);
}

#[test]
fn test_gen_bad_line_list() {
    let temp = setup();

    gounit(&temp.path().join("config"))
        .args(["gen", "-l", "3,x", "-i"])
        .arg(temp.path().join("calc/calc.go"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected unsigned int, got: x"));
}

#[test]
fn test_gen_reads_stdin() {
    let temp = setup();

    gounit(&temp.path().join("config"))
        .args(["gen", "--stdin", "--stdout", "-i"])
        .arg(temp.path().join("calc/other.go"))
        .write_stdin("package calc\n\nfunc Mul(a, b int) int { return a * b }\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("func TestMul(t *testing.T)"));
}

#[test]
fn test_json_stream() {
    let temp = setup();
    let request = serde_json::json!({
        "inputFilePath": "calc.go",
        "inputFile": CALC_SRC,
        "functions": ["Add"],
    });

    gounit(&temp.path().join("config"))
        .args(["gen", "--json-stream"])
        .write_stdin(request.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("generatedCode"))
        .stdout(predicate::str::contains("func TestAdd("));
}

// =============================================================================
// TEMPLATES
// =============================================================================

#[test]
fn test_template_lifecycle() {
    let temp = setup();
    let config = temp.path().join("config");
    let file = temp.path().join("minimal");
    fs::write(&file, "\n\nfunc {{ func.test_name }}(t *testing.T) {\n\tt.Skip()\n}\n").unwrap();

    gounit(&config)
        .args(["template", "add"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed template minimal"));

    gounit(&config).args(["template", "use", "minimal"]).assert().success();

    gounit(&config)
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* minimal (default)"));

    gounit(&config)
        .args(["gen", "--stdout", "-f", "Add", "-i"])
        .arg(temp.path().join("calc/calc.go"))
        .assert()
        .success()
        .stdout(predicate::str::contains("t.Skip()"));

    gounit(&config).args(["template", "remove", "minimal"]).assert().success();

    gounit(&config)
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* default (default)"));
}

#[test]
fn test_template_add_rejects_broken_template() {
    let temp = setup();
    let file = temp.path().join("broken");
    fs::write(&file, "func {{ func.test_name }}( {\n").unwrap();

    gounit(&temp.path().join("config"))
        .args(["template", "add"])
        .arg(&file)
        .assert()
        .failure();
}

#[test]
fn test_template_use_unknown() {
    let temp = setup();

    gounit(&temp.path().join("config"))
        .args(["template", "use", "nope"])
        .assert()
        .code(2);
}

#[test]
fn test_template_list_json() {
    let temp = setup();

    gounit(&temp.path().join("config"))
        .args(["--json", "template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"default\""));
}

// =============================================================================
// MISC
// =============================================================================

#[test]
fn test_version() {
    let temp = setup();

    gounit(&temp.path().join("config"))
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gounit v"));
}
