/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unexpected tokens, unbalanced parentheses, and malformed literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// differentiation: arity and unit violations, unsupported call shapes or
/// derivatives, unbound symbols in strict mode, and type mismatches.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{ErrorKind, RuntimeError};

/// Any error that aborts the evaluation of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source text could not be tokenized or parsed.
    Parse(ParseError),
    /// A statement failed during evaluation.
    Runtime {
        /// The underlying runtime error.
        error: RuntimeError,
        /// The line of the failing statement.
        line:  usize,
    },
}

impl Error {
    /// Returns the runtime error kind, or `None` for parse errors.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Parse(_) => None,
            Self::Runtime { error, .. } => Some(error.kind()),
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime { error, line } => write!(f, "Error on line {line}: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Runtime { error, .. } => Some(error),
        }
    }
}
