//! Persistent storage for user-supplied test templates
//!
//! - `templates`: installed template files plus the default selection

/// Installed template storage
pub mod templates;

pub use templates::{TemplateEntry, TemplateStore, validate};
