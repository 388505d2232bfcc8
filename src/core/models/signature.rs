//! Signature view
//!
//! A read-only, template-ready projection of one [`FunctionDeclaration`].
//! Every attribute is derived eagerly on construction and is a pure
//! function of the declaration.

use serde::Serialize;

use super::{ERROR_TYPE, Field, FunctionDeclaration};

/// Name given to a trailing error result
pub const ERR_RESULT_NAME: &str = "err";

/// Prefix of synthetic result names
pub const GOT_PREFIX: &str = "got";

/// Template-facing view of a function or method signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureView {
    /// Declared name
    pub name: String,
    /// Name of the generated test function
    pub test_name: String,
    /// 1-based line of the declaration
    pub line: usize,
    /// Declared with exactly one receiver
    pub is_method: bool,
    /// Receiver type with pointer marker, e.g. `*Reader`; empty for functions
    pub receiver_type: String,
    /// Receiver type name without pointer or type parameters, e.g. `Reader`
    pub receiver_name: String,
    /// `name type` for every named parameter, variadic ones as `name []T`
    pub params: Vec<String>,
    /// Call-site argument names, variadic ones as `name...`
    pub param_names: Vec<String>,
    /// Number of parameter slots, anonymous ones included
    pub num_params: usize,
    /// `gotN type` for every result except a trailing error
    pub results: Vec<String>,
    /// Synthetic result names; a trailing error is named `err`
    pub result_names: Vec<String>,
    /// Synthetic names compared against expected values
    pub non_error_results: Vec<String>,
    /// Number of result slots
    pub num_results: usize,
    /// Last result is the built-in `error` type
    pub returns_error: bool,
    /// Last parameter is `...T`
    pub is_variadic: bool,
}

impl SignatureView {
    /// Build the view for a declaration
    #[must_use]
    pub fn new(decl: &FunctionDeclaration) -> Self {
        let receiver = decl.receiver_field();
        let receiver_type = receiver.map(|r| r.ty.to_string()).unwrap_or_default();
        let receiver_name = receiver.map(|r| base_type_name(r.ty.without_pointer())).unwrap_or_default();

        let (params, param_names) = project_params(&decl.params);
        let returns_error = decl.results.last().is_some_and(|r| r.ty.is_ident(ERROR_TYPE));
        let (mut results, mut result_names) = project_results(&decl.results);

        if returns_error {
            results.pop();
            if let Some(last) = result_names.last_mut() {
                *last = ERR_RESULT_NAME.to_string();
            }
        }

        let non_error_results = if returns_error {
            result_names[..result_names.len() - 1].to_vec()
        } else {
            result_names.clone()
        };

        Self {
            name: decl.name.clone(),
            test_name: test_name(&decl.name, &receiver_name),
            line: decl.line,
            is_method: receiver.is_some(),
            receiver_type,
            receiver_name,
            params,
            param_names,
            num_params: decl.params.iter().map(Field::slots).sum(),
            num_results: result_names.len(),
            results,
            result_names,
            non_error_results,
            returns_error,
            is_variadic: decl.params.last().is_some_and(|p| p.variadic),
        }
    }
}

impl From<&FunctionDeclaration> for SignatureView {
    fn from(decl: &FunctionDeclaration) -> Self {
        Self::new(decl)
    }
}

/// Derive the test function name
///
/// Unexported (lower-case) names get an underscore after `Test` and after
/// the receiver: `Test_add`, `Test_Reader_read`. Exported names are joined
/// directly: `TestAdd`, `TestReaderRead`.
#[must_use]
pub fn test_name(name: &str, receiver: &str) -> String {
    if name.chars().next().is_some_and(char::is_lowercase) {
        if receiver.is_empty() {
            format!("Test_{name}")
        } else {
            format!("Test_{receiver}_{name}")
        }
    } else {
        format!("Test{receiver}{name}")
    }
}

/// Strip type parameters: `List[T]` -> `List`
fn base_type_name(ty: &str) -> String {
    let ty = ty.trim_start();
    ty.split('[').next().unwrap_or(ty).trim().to_string()
}

/// Named parameters as declarations and as call-site arguments
fn project_params(params: &[Field]) -> (Vec<String>, Vec<String>) {
    let mut decls = Vec::new();
    let mut names = Vec::new();

    for field in params {
        for name in &field.names {
            if field.variadic {
                decls.push(format!("{name} []{}", field.ty));
                names.push(format!("{name}..."));
            } else {
                decls.push(format!("{name} {}", field.ty));
                names.push(name.clone());
            }
        }
    }

    (decls, names)
}

/// Every result slot as `gotN type` and as `gotN`
fn project_results(results: &[Field]) -> (Vec<String>, Vec<String>) {
    let mut decls = Vec::new();
    let mut names = Vec::new();

    for field in results {
        for _ in 0..field.slots() {
            let name = format!("{GOT_PREFIX}{}", names.len() + 1);
            decls.push(format!("{name} {}", field.ty));
            names.push(name);
        }
    }

    (decls, names)
}
