//! Error types for gounit
//!
//! [`Error`] is the failure taxonomy of a generation run. Every variant
//! maps to a stable process exit code so transports can report failures
//! consistently.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code for failures without a dedicated code
pub const EXIT_GENERIC: i32 = 1;

/// Exit code for invalid command line usage
pub const EXIT_COMMAND_LINE: i32 = 2;

/// A syntax error reported by a source parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}:{line}:{column}: {message}", .path.display())]
pub struct ParseError {
    /// File the text was read from
    pub path: PathBuf,
    /// 1-based line of the first error
    pub line: usize,
    /// 1-based column of the first error
    pub column: usize,
    /// Human-readable description
    pub message: String,
}

impl ParseError {
    /// Create a parse error at a position
    pub fn new(
        path: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            line,
            column,
            message: message.into(),
        }
    }
}

/// Failure of an import normalizer
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The rendered buffer is not valid source
    #[error(transparent)]
    Syntax(#[from] ParseError),

    /// The external tool could not be run
    #[error("failed to run {tool}: {source}")]
    Spawn {
        /// Executable name
        tool: String,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The external tool rejected the buffer
    #[error("{tool} failed: {stderr}")]
    Tool {
        /// Executable name
        tool: String,
        /// What the tool wrote to stderr
        stderr: String,
    },
}

/// Errors produced while generating tests
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid command line or request parameters
    #[error("{0}")]
    CommandLine(String),

    /// The header template failed to execute
    #[error("failed to write header: {0}")]
    Header(#[source] minijinja::Error),

    /// The test template failed to execute
    #[error("failed to write test: {0}")]
    Test(#[source] minijinja::Error),

    /// No declaration matched the selection
    #[error("unable to find a function declaration")]
    FuncNotFound,

    /// The tested source has a syntax error
    #[error("failed to parse input file: {0}")]
    ParseInput(#[source] ParseError),

    /// An existing test source has a syntax error
    #[error("failed to parse output file: {0}")]
    ParseOutput(#[source] ParseError),

    /// The input file exists but cannot be read
    #[error("failed to open input file: {0}")]
    OpenInput(#[source] std::io::Error),

    /// The output file exists but cannot be read
    #[error("failed to open output file: {0}")]
    OpenOutput(#[source] std::io::Error),

    /// The output file cannot be created
    #[error("failed to create output file: {0}")]
    CreateOutput(#[source] std::io::Error),

    /// The input file is missing and stdin was not requested
    #[error("input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The import normalizer rejected the generated buffer
    #[error("failed to fix imports: {0}")]
    FixImports(#[source] NormalizeError),

    /// The generated code cannot be written
    #[error("failed to write generated test: {0}")]
    WriteTest(#[source] std::io::Error),

    /// A caller-supplied template does not parse
    #[error("invalid test template: {0}")]
    InvalidTemplate(#[source] minijinja::Error),
}

impl Error {
    /// Process exit code for this error
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::CommandLine(_) => EXIT_COMMAND_LINE,
            Self::Header(_) => 3,
            Self::Test(_) => 4,
            Self::FuncNotFound => 6,
            Self::ParseInput(_) => 9,
            Self::ParseOutput(_) => 10,
            Self::OpenInput(_) => 11,
            Self::OpenOutput(_) => 12,
            Self::CreateOutput(_) => 13,
            Self::InputNotFound(_) => 14,
            Self::FixImports(_) => 17,
            Self::WriteTest(_) => 18,
            Self::InvalidTemplate(_) => EXIT_GENERIC,
        }
    }
}

/// Result alias for gounit operations
pub type Result<T> = std::result::Result<T, Error>;
