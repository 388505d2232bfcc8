//! Centralized path definitions for gounit
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/gounit/             # or $GOUNIT_CONFIG_DIR
//! ├── config.toml               # Default template selection
//! └── templates/                # Installed test templates
//!     ├── table
//!     └── minimal
//! ```
//!
//! The directory is resolved once here and handed to the components that
//! need it; nothing below the command layer reads the environment.

use std::path::{Path, PathBuf};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "GOUNIT_CONFIG_DIR";

/// Directory name under the platform config directory
const APP_DIR: &str = "gounit";

/// Global config filename
const CONFIG_FILE: &str = "config.toml";

/// Installed templates subdirectory
const TEMPLATES_DIR: &str = "templates";

/// Suffix of Go test files
const TEST_FILE_SUFFIX: &str = "_test.go";

/// Get the gounit config directory.
///
/// Returns `$GOUNIT_CONFIG_DIR` when set, else `<config dir>/gounit`.
#[must_use]
pub fn config_dir() -> PathBuf {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR),
    }
}

/// Get the config file path inside a config directory.
#[must_use]
pub fn config_file(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Get the installed templates directory inside a config directory.
#[must_use]
pub fn templates_dir(dir: &Path) -> PathBuf {
    dir.join(TEMPLATES_DIR)
}

/// Default test file for a Go source file.
///
/// `calc/calc.go` becomes `calc/calc_test.go`.
#[must_use]
pub fn default_output(input: &Path) -> PathBuf {
    let raw = input.to_string_lossy();
    let stem = raw.strip_suffix(".go").unwrap_or(&raw);
    PathBuf::from(format!("{stem}{TEST_FILE_SUFFIX}"))
}
