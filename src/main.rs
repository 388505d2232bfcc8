//! gounit - generate table-driven test stubs for Go functions and methods
//!
//! The binary wires the library's parser, templates and import normalizers
//! to the command line, the JSON stream and the interactive prompt.

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

mod cli;
mod commands;

use std::process::ExitCode;

/// Main entry point for the gounit CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gounit: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Exit code of the first [`gounit::Error`] in the cause chain
fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<gounit::Error>())
        .map_or(gounit::EXIT_GENERIC, gounit::Error::code);
    u8::try_from(code).unwrap_or(1)
}
