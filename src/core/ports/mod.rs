//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the generation pipeline
//! and the language-specific tooling it consumes.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap a tree-sitter parser or an external `goimports`
//!   without changing the pipeline
//! - **Clarity**: Clear boundaries between layers

mod import_normalizer;
mod source_parser;

pub use import_normalizer::ImportNormalizer;
pub use source_parser::SourceParser;

#[cfg(test)]
pub use import_normalizer::MockImportNormalizer;
#[cfg(test)]
pub use source_parser::MockSourceParser;
