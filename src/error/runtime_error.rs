#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and differentiation.
///
/// Runtime errors carry no source position themselves; the evaluator attaches
/// the line of the failing statement when it wraps them into
/// [`crate::error::Error::Runtime`].
pub enum RuntimeError {
    /// A function was called with the wrong number of arguments.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The declared arity.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// An operator reached the differentiation engine with an unsupported
    /// number of operands.
    DiffArity {
        /// The operator or function name.
        operator: String,
        /// The number of operands found.
        found:    usize,
    },
    /// Two units cannot be combined by the requested operation.
    UnitMismatch {
        /// Details describing the rejected combination.
        details: String,
    },
    /// Tried to attach a unit to a number that already carries one.
    UnitAlreadySet {
        /// The unit already present.
        unit: String,
    },
    /// An operator token is not valid at this position of an operator chain.
    UnsupportedOperator {
        /// The operator that was found.
        operator: String,
    },
    /// The left side of a call chain cannot be applied to the right side.
    UnsupportedCall {
        /// Details about the rejected call shape.
        details: String,
    },
    /// No differentiation rule exists for the expression.
    UnsupportedDerivative {
        /// Details about the rejected expression.
        details: String,
    },
    /// A symbol has no binding and the context requires one.
    UnboundSymbol {
        /// The name of the symbol.
        name: String,
    },
    /// A value had a different variant than the operation requires.
    TypeMismatch {
        /// The expected variant.
        expected: &'static str,
        /// A rendering of the value that was found.
        found:    String,
    },
}

/// Coarse classification of [`RuntimeError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong argument or operand count.
    Arity,
    /// Incompatible unit combination.
    Unit,
    /// Unsupported operator, call shape or derivative.
    UnsupportedOperation,
    /// Unbound symbol in strict mode.
    UnboundReference,
    /// Unexpected value variant.
    TypeMismatch,
}

impl RuntimeError {
    /// Returns the kind of this error.
    ///
    /// # Example
    /// ```
    /// use symcalc::error::{ErrorKind, RuntimeError};
    ///
    /// let error = RuntimeError::UnitAlreadySet { unit: "s".to_string() };
    /// assert_eq!(error.kind(), ErrorKind::Unit);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ArityMismatch { .. } | Self::DiffArity { .. } => ErrorKind::Arity,
            Self::UnitMismatch { .. } | Self::UnitAlreadySet { .. } => ErrorKind::Unit,
            Self::UnsupportedOperator { .. }
            | Self::UnsupportedCall { .. }
            | Self::UnsupportedDerivative { .. } => ErrorKind::UnsupportedOperation,
            Self::UnboundSymbol { .. } => ErrorKind::UnboundReference,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch { name,
                                  expected,
                                  found, } => write!(f,
                                                     "Function '{name}' expects {expected} argument(s) but got {found}."),
            Self::DiffArity { operator, found } => write!(f,
                                                          "Cannot differentiate '{operator}' applied to {found} operand(s)."),
            Self::UnitMismatch { details } => write!(f, "Unit mismatch: {details}."),
            Self::UnitAlreadySet { unit } => {
                write!(f, "Trying to add a unit to a number already in '{unit}'.")
            },
            Self::UnsupportedOperator { operator } => {
                write!(f, "Unexpected operator '{operator}'.")
            },
            Self::UnsupportedCall { details } => write!(f, "Unsupported call: {details}."),
            Self::UnsupportedDerivative { details } => {
                write!(f, "Unsupported derivative: {details}.")
            },
            Self::UnboundSymbol { name } => write!(f, "Unknown symbol '{name}'."),
            Self::TypeMismatch { expected, found } => {
                write!(f, "Type error: expected {expected}, found '{found}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
