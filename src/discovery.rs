//! Sibling test discovery
//!
//! Finds the other test sources of a package next to the output file, so
//! functions already tested elsewhere in the package are not generated
//! again.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use gounit::adapters::GoParser;
//! use gounit::discovery::find_siblings;
//!
//! let siblings = find_siblings(&GoParser, Path::new("calc/calc_test.go"), "calc").unwrap();
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::core::ports::SourceParser;
use crate::core::services::SourceText;
use crate::error::{Error, Result};

const GO_EXT: &str = "go";
const TEST_SUFFIX: &str = "_test.go";

/// A test source found next to the output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingFile {
    /// Path of the file
    pub path: PathBuf,
    /// Full contents
    pub text: String,
}

impl SiblingFile {
    /// Borrow as generator input
    #[must_use]
    pub fn as_source(&self) -> SourceText<'_> {
        SourceText::new(&self.path, &self.text)
    }
}

/// Test sources in the output directory, sorted by path
///
/// A `.go` file qualifies when its name ends in `_test.go` or it declares
/// the external test package `<package>_test`. The output file itself is
/// excluded, as are hidden files. A missing directory yields nothing.
pub fn find_siblings(
    parser: &dyn SourceParser,
    output: &Path,
    package: &str,
) -> Result<Vec<SiblingFile>> {
    let dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let external = format!("{package}_test");
    let own_name = output.file_name();
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::OpenOutput(e.into()))?;
        if !entry.file_type().is_file() || is_hidden(&entry) {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(GO_EXT)
            || Some(entry.file_name()) == own_name
        {
            continue;
        }

        let is_test_file = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(TEST_SUFFIX));
        let text = fs::read_to_string(path).map_err(Error::OpenOutput)?;

        if !is_test_file {
            match parser.package_name(&text) {
                Some(name) if name == external => {}
                Some(_) => continue,
                None => {
                    warn!("skipping {}: package clause not found", path.display());
                    continue;
                }
            }
        }

        debug!("sibling test source {}", path.display());
        found.push(SiblingFile {
            path: path.to_path_buf(),
            text,
        });
    }

    Ok(found)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
