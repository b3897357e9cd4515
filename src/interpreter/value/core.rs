use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{function::Function, number::Number},
    },
};

/// Heads that print infix instead of in call form.
pub const ARITHMETIC_HEADS: &[&str] = &["+", "-", "/", "*", "%", "**", "^"];

/// Represents a runtime value in the interpreter.
///
/// Every operator is total over `Value`: when an operand is not a
/// [`Value::Number`], the operator builds a [`Value::Expression`] instead of
/// failing, which is how free symbols compose into symbolic trees.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No printable result, produced by assignments and `clear`.
    Null,
    /// An unbound identifier, or an operator/function name used as a handle.
    Symbol(String),
    /// A concrete scalar with an optional unit.
    Number(Number),
    /// A callable.
    Function(Function),
    /// A fixed-size heterogeneous grouping.
    Tuple(Vec<Self>),
    /// An unevaluated symbolic application.
    Expression {
        /// The name of the applied symbol.
        head:      String,
        /// The arguments, in order.
        arguments: Vec<Self>,
    },
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(Number::new(v))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Self::Function(f)
    }
}

impl Value {
    /// Builds a symbol value.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Builds a symbolic expression applying `head` to `arguments`.
    ///
    /// # Example
    /// ```
    /// use symcalc::interpreter::value::core::Value;
    ///
    /// let e = Value::expression("sin", vec![Value::symbol("x")]);
    /// assert_eq!(e.to_string(), "sin(x)");
    /// ```
    #[must_use]
    pub fn expression(head: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::Expression { head: head.into(),
                           arguments }
    }

    /// Returns the number, or a `TypeMismatch` error for any other variant.
    pub fn as_number(&self) -> EvalResult<&Number> {
        match self {
            Self::Number(n) => Ok(n),
            _ => Err(self.mismatch("number")),
        }
    }

    /// Returns the symbol name, or a `TypeMismatch` error for any other
    /// variant.
    pub fn as_symbol(&self) -> EvalResult<&str> {
        match self {
            Self::Symbol(name) => Ok(name),
            _ => Err(self.mismatch("symbol")),
        }
    }

    /// Returns `true` for a number whose value is exactly zero, whatever its
    /// unit.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Number(n) if n.value == 0.0)
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Builds a `TypeMismatch` error describing this value.
    #[must_use]
    pub fn mismatch(&self, expected: &'static str) -> RuntimeError {
        RuntimeError::TypeMismatch { expected,
                                     found: format!("{} {self}", self.variant_name()) }
    }

    /// A short name of the variant, used in error messages.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Symbol(_) => "symbol",
            Self::Number(_) => "number",
            Self::Function(_) => "function",
            Self::Tuple(_) => "tuple",
            Self::Expression { .. } => "expression",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Symbol(name) => write!(f, "{name}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Function(func) => write!(f, "{}", func.name),
            Self::Tuple(values) => {
                write!(f, "(")?;
                write_joined(f, values, ", ")?;
                write!(f, ")")
            },
            Self::Expression { head, arguments } if ARITHMETIC_HEADS.contains(&head.as_str()) => {
                match arguments.as_slice() {
                    [] => write!(f, "0"),
                    [single] => write!(f, "{single}"),
                    _ => {
                        write!(f, "(")?;
                        write_joined(f, arguments, &format!(" {head} "))?;
                        write!(f, ")")
                    },
                }
            },
            Self::Expression { head, arguments } => {
                write!(f, "{head}(")?;
                write_joined(f, arguments, ", ")?;
                write!(f, ")")
            },
        }
    }
}

fn write_joined(f: &mut std::fmt::Formatter<'_>,
                values: &[Value],
                separator: &str)
                -> std::fmt::Result {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            write!(f, "{separator}")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuples_print_comma_joined() {
        let tuple = Value::Tuple(vec![3.0.into(), 2.0.into(), 2.0.into()]);
        assert_eq!(tuple.to_string(), "(3, 2, 2)");
    }

    #[test]
    fn arithmetic_expressions_print_infix_with_parentheses() {
        let inner = Value::expression("*", vec![2.0.into(), Value::symbol("x")]);
        let outer = Value::expression("+", vec![inner, 1.0.into()]);
        assert_eq!(outer.to_string(), "((2 * x) + 1)");
    }

    #[test]
    fn degenerate_arithmetic_expressions_collapse() {
        assert_eq!(Value::expression("+", vec![]).to_string(), "0");
        assert_eq!(Value::expression("-", vec![Value::symbol("x")]).to_string(), "x");
    }

    #[test]
    fn other_heads_print_in_call_form() {
        let e = Value::expression("log", vec![Value::symbol("x"), 10.0.into()]);
        assert_eq!(e.to_string(), "log(x, 10)");
    }

    #[test]
    fn numbers_carry_their_unit_when_printed() {
        assert_eq!(Value::from(Number::with_unit_label(2.0, "s")).to_string(), "2 s");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
    }

    #[test]
    fn wrong_variant_is_a_type_mismatch() {
        let error = Value::symbol("x").as_number().unwrap_err();
        assert_eq!(error,
                   RuntimeError::TypeMismatch { expected: "number",
                                                found:    "symbol x".to_string(), });
    }
}
