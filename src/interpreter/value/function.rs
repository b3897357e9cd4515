use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Signature of a builtin function body.
///
/// A builtin receives the evaluated arguments and nothing else; it has no
/// access to the registry.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// What happens when a [`Function`] is invoked.
#[derive(Debug, Clone, Copy)]
pub enum FunctionBody {
    /// A plain builtin operating on its arguments.
    Builtin(BuiltinFn),
    /// Resets the registry of the calling context to its defaults. Handled by
    /// the evaluator, which owns the registry.
    Clear,
}

/// A callable value.
#[derive(Debug, Clone)]
pub struct Function {
    /// The name the function was registered under. Used for printing and as
    /// the head of symbolic results.
    pub name:  String,
    /// The required argument count; `None` accepts any count.
    pub arity: Option<usize>,
    /// The body to run.
    pub body:  FunctionBody,
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
        && self.arity == other.arity
        && matches!((self.body, other.body),
                    (FunctionBody::Builtin(_), FunctionBody::Builtin(_))
                    | (FunctionBody::Clear, FunctionBody::Clear))
    }
}

impl Function {
    /// Creates a builtin function.
    #[must_use]
    pub fn builtin(name: &str, arity: Option<usize>, body: BuiltinFn) -> Self {
        Self { name: name.to_string(),
               arity,
               body: FunctionBody::Builtin(body) }
    }

    /// Creates the registry-reset function.
    #[must_use]
    pub fn clear(name: &str) -> Self {
        Self { name:  name.to_string(),
               arity: Some(0),
               body:  FunctionBody::Clear, }
    }

    /// Verifies that `found` arguments satisfy the declared arity.
    ///
    /// # Errors
    /// Returns `RuntimeError::ArityMismatch` if the arity is set and differs
    /// from `found`.
    ///
    /// # Example
    /// ```
    /// use symcalc::interpreter::value::function::Function;
    ///
    /// let f = Function::builtin("id", Some(1), |args| Ok(args[0].clone()));
    /// assert!(f.check_arity(1).is_ok());
    /// assert!(f.check_arity(2).is_err());
    /// ```
    pub fn check_arity(&self, found: usize) -> EvalResult<()> {
        match self.arity {
            Some(expected) if expected != found => {
                Err(RuntimeError::ArityMismatch { name: self.name.clone(),
                                                  expected,
                                                  found })
            },
            _ => Ok(()),
        }
    }
}
