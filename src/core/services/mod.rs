//! Business logic services
//!
//! Pure orchestration logic that operates on domain models. Parsing and
//! import normalization are reached through the port traits only.
//!
//! - [`selector`] - Pick the declarations a run targets
//! - [`resolver`] - Drop candidates that already have a test
//! - [`generator`] - Compose a full run into the new test file

pub mod generator;
pub mod resolver;
pub mod selector;

pub use generator::{Generated, Generator, SourceText, normalize};
pub use resolver::{TestIndex, build_test_index, filter_missing};
pub use selector::{match_all, select};
