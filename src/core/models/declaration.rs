//! Declaration tree model
//!
//! The structured view of one parsed Go source file. Produced by a
//! [`SourceParser`](crate::core::ports::SourceParser) and only ever read by
//! the core.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Name of Go's built-in failure-signaling type
pub const ERROR_TYPE: &str = "error";

static MAJOR_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v[0-9]+$").expect("valid regex"));

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

/// A type expression as it appears in the source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeExpr(String);

impl TypeExpr {
    /// Create a type expression from its source text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Source text of the expression
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the expression is the bare identifier `name`
    #[must_use]
    pub fn is_ident(&self, name: &str) -> bool {
        self.0 == name
    }

    /// Source text with pointer markers removed (`*Reader` -> `Reader`)
    #[must_use]
    pub fn without_pointer(&self) -> &str {
        self.0.trim_start_matches('*')
    }
}

impl std::fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeExpr {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// One entry of a parameter, result or receiver list
///
/// A field declares zero or more names sharing one type: `a, b int` is a
/// single field with two names, `int` in `func() (int, error)` a field with
/// none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Declared names, empty for anonymous fields
    pub names: Vec<String>,
    /// Declared type; the element type for a variadic parameter
    pub ty: TypeExpr,
    /// Declared as `...T`
    #[serde(default)]
    pub variadic: bool,
}

impl Field {
    /// Named field
    pub fn named<I, S>(names: I, ty: impl Into<TypeExpr>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ty: ty.into(),
            variadic: false,
        }
    }

    /// Anonymous field
    pub fn anonymous(ty: impl Into<TypeExpr>) -> Self {
        Self {
            names: Vec::new(),
            ty: ty.into(),
            variadic: false,
        }
    }

    /// Mark the field as a trailing `...T` parameter
    #[must_use]
    pub fn into_variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Number of slots this field occupies in a signature
    #[must_use]
    pub fn slots(&self) -> usize {
        self.names.len().max(1)
    }
}

impl From<&str> for Field {
    fn from(ty: &str) -> Self {
        Self::anonymous(ty)
    }
}

/// A function or method declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// Declared name
    pub name: String,
    /// Receiver list; a method declares exactly one entry
    #[serde(default)]
    pub receiver: Vec<Field>,
    /// Parameter list in declaration order
    #[serde(default)]
    pub params: Vec<Field>,
    /// Result list in declaration order
    #[serde(default)]
    pub results: Vec<Field>,
    /// 1-based line of the `func` keyword
    pub line: usize,
}

impl FunctionDeclaration {
    /// Create a free function with no parameters or results
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            receiver: Vec::new(),
            params: Vec::new(),
            results: Vec::new(),
            line,
        }
    }

    /// Set the receiver type
    #[must_use]
    pub fn with_receiver(mut self, receiver: Field) -> Self {
        self.receiver = vec![receiver];
        self
    }

    /// Append a parameter field
    #[must_use]
    pub fn with_param(mut self, param: Field) -> Self {
        self.params.push(param);
        self
    }

    /// Append a result field
    #[must_use]
    pub fn with_result(mut self, result: Field) -> Self {
        self.results.push(result);
        self
    }

    /// The receiver field, present iff exactly one receiver is declared
    #[must_use]
    pub fn receiver_field(&self) -> Option<&Field> {
        match self.receiver.as_slice() {
            [recv] => Some(recv),
            _ => None,
        }
    }

    /// Whether the declaration is a method
    #[must_use]
    pub fn is_method(&self) -> bool {
        self.receiver_field().is_some()
    }
}

/// An import specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSpec {
    /// Explicit package name (`alias`, `.` or `_`)
    pub alias: Option<String>,
    /// Unquoted import path
    pub path: String,
    /// The spec exactly as written, e.g. `str "strings"`
    pub source: String,
}

impl ImportSpec {
    /// A plain import of `path`
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            alias: None,
            source: format!("\"{path}\""),
            path,
        }
    }

    /// Name the package is referenced by in code
    ///
    /// The alias when there is one, else the last path element with a
    /// trailing major version (`/v3`) skipped. `None` when the name cannot
    /// be told from the path.
    #[must_use]
    pub fn package_name(&self) -> Option<&str> {
        if let Some(alias) = self.alias.as_deref() {
            return Some(alias);
        }

        let mut elems = self.path.rsplit('/');
        let mut name = elems.next()?;
        if MAJOR_VERSION.is_match(name) {
            name = elems.next()?;
        }
        IDENTIFIER.is_match(name).then_some(name)
    }
}

/// One top-level declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    /// `func` declaration, with or without receiver
    Function(FunctionDeclaration),
    /// `type`, `var` or `const` declaration
    Other {
        /// 1-based line where the declaration starts
        line: usize,
    },
}

/// The parsed form of one source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationTree {
    /// Package clause name
    pub package: String,
    /// Top-level declarations in source order
    pub declarations: Vec<Declaration>,
    /// Import specs in source order
    pub imports: Vec<ImportSpec>,
}

impl DeclarationTree {
    /// Create an empty tree for a package
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            declarations: Vec::new(),
            imports: Vec::new(),
        }
    }

    /// Append a function declaration
    #[must_use]
    pub fn with_function(mut self, decl: FunctionDeclaration) -> Self {
        self.declarations.push(Declaration::Function(decl));
        self
    }

    /// Iterate over function and method declarations in source order
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDeclaration> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Function(f) => Some(f),
            Declaration::Other { .. } => None,
        })
    }
}
