//! Template store lifecycle

use std::fs;

use tempfile::TempDir;

use gounit::storage::{TemplateStore, validate};
use gounit::template::{DEFAULT_TEMPLATE_NAME, DEFAULT_TEST};

const MINIMAL: &str = "\n\nfunc {{ func.test_name }}(t *testing.T) {\n\tt.Skip(\"{{ comment }}\")\n}\n";

fn store() -> (TempDir, TemplateStore) {
    let dir = TempDir::new().unwrap();
    let store = TemplateStore::new(dir.path().join("config"));
    (dir, store)
}

fn template_file(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_fresh_store_lists_builtin_default() {
    let (_dir, store) = store();
    let entries = store.list().unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, DEFAULT_TEMPLATE_NAME);
    assert!(entries[0].is_default);
    assert_eq!(store.load(None).unwrap(), DEFAULT_TEST);
}

#[test]
fn test_add_use_remove() {
    let (dir, store) = store();
    let file = template_file(&dir, "minimal", MINIMAL);

    assert_eq!(store.add(&file).unwrap(), "minimal");
    store.set_default("minimal").unwrap();

    let entries = store.list().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(!entries[0].is_default);
    assert!(entries[1].is_default);
    assert_eq!(store.load(None).unwrap(), MINIMAL);

    store.remove("minimal").unwrap();
    assert!(!store.exists("minimal"));
    assert_eq!(store.load(None).unwrap(), DEFAULT_TEST);
}

#[test]
fn test_invalid_template_is_rejected() {
    let (dir, store) = store();
    let file = template_file(&dir, "broken", "func {{ func.test_name }}( {\n");

    assert!(store.add(&file).is_err());
    assert!(!store.exists("broken"));
}

#[test]
fn test_default_name_is_reserved() {
    let (dir, store) = store();
    let file = template_file(&dir, DEFAULT_TEMPLATE_NAME, MINIMAL);

    assert!(store.add(&file).is_err());
    assert!(store.remove(DEFAULT_TEMPLATE_NAME).is_err());
}

#[test]
fn test_unknown_template() {
    let (_dir, store) = store();

    assert!(store.set_default("nope").is_err());
    assert!(store.remove("nope").is_err());
    assert!(store.load(Some("nope")).is_err());
}

#[test]
fn test_validate_builtin() {
    validate(DEFAULT_TEST).unwrap();
    validate(MINIMAL).unwrap();
    assert!(validate("{% if %}").is_err());
}
