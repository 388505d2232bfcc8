//! Import normalizer port
//!
//! Defines the interface for reconciling the import block of a fully
//! rendered test file with the identifiers it actually uses.

use std::path::Path;

use crate::core::models::ImportSpec;
use crate::error::NormalizeError;

/// Rewrites the import block of a generated file
///
/// Applied once to the complete buffer before it is persisted. `pool`
/// holds the imports the generated code may need; a normalizer adds the
/// ones whose package is referenced but not imported, and drops the
/// imports nothing references.
#[cfg_attr(test, mockall::automock)]
pub trait ImportNormalizer: Send + Sync {
    /// Return the formatted source for `path`
    fn normalize(
        &self,
        path: &Path,
        source: &str,
        pool: &[ImportSpec],
    ) -> Result<String, NormalizeError>;
}
