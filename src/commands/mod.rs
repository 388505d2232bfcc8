//! Command implementations

mod generate;
mod template;

pub use generate::generate;
pub use template::template_cmd;
