//! Adapter implementations for port traits
//!
//! This module contains the concrete collaborators of the generator:
//!
//! - `go/` - tree-sitter Go parser and the built-in import pruner
//! - `goimports` - import normalization through the external tool

pub mod go;
pub mod goimports;

pub use go::{GoParser, PruneImports};
pub use goimports::Goimports;
