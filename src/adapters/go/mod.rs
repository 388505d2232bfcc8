//! Go language adapters
//!
//! - [`GoParser`] - tree-sitter [`SourceParser`](crate::core::ports::SourceParser)
//! - [`PruneImports`] - built-in [`ImportNormalizer`](crate::core::ports::ImportNormalizer)

mod imports;
mod parser;

pub use imports::PruneImports;
pub use parser::GoParser;
