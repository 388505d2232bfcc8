//! Transport layer
//!
//! Typed request/response structures, a transport-agnostic handler and the
//! two stream transports built on it.
//!
//! ## Design
//!
//! - **The handler works on texts**: source and test file in, generated
//!   text out; it only reads sibling test sources next to the output path
//! - **Transports only frame**: JSON objects or prompted text blocks
//! - **Errors are [`crate::Error`]**: the first failure ends a stream

mod handlers;
mod json;
mod prompt;
mod types;

pub use handlers::Handler;
pub use json::serve_json;
pub use prompt::serve_interactive;
pub use types::{GenerateRequest, GenerateResponse};
