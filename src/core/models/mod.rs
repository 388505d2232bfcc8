//! Domain models for gounit
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`DeclarationTree`] - One parsed source file
//! - [`FunctionDeclaration`] - A function or method signature
//! - [`SelectionCriteria`] - Which declarations to generate tests for
//! - [`SignatureView`] - Template-ready projection of a declaration

mod declaration;
mod selection;
mod signature;

pub use declaration::{
    Declaration, DeclarationTree, ERROR_TYPE, Field, FunctionDeclaration, ImportSpec, TypeExpr,
};
pub use selection::{
    SELECT_ALL_NAME, SelectionCriteria, parse_function_name, parse_line, parse_lines,
};
pub use signature::{ERR_RESULT_NAME, GOT_PREFIX, SignatureView, test_name};
