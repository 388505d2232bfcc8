//! gounit - generate table-driven test stubs for Go functions and methods
//!
//! This library parses a Go source file, picks the declarations to cover,
//! skips the ones that already have a test and renders the rest through a
//! user-replaceable template.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod discovery;
pub mod error;
pub mod output;
pub mod paths;
pub mod storage;
pub mod template;

pub use error::{EXIT_COMMAND_LINE, EXIT_GENERIC, Error, NormalizeError, ParseError, Result};
