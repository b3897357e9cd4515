use std::collections::HashMap;

use crate::{
    ast::{Expr, Statement},
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::function::core::default_registry,
        parser::core::parse_source,
        value::{core::Value, ops},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a reference to an unbound symbol is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolveMode {
    /// Unbound symbols evaluate to themselves and build symbolic expressions.
    #[default]
    Free,
    /// Unbound symbols are an `UnboundSymbol` error.
    Strict,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the registry that maps names to
/// values, seeded with the constants and builtin functions, and the symbol
/// resolution mode.
///
/// ## Usage
///
/// A `Context` lives for one session. Bindings made by one call to
/// [`Context::evaluate`] are visible to the next, until `clear` resets the
/// registry.
#[derive(Debug, Clone)]
pub struct Context {
    /// Name to value bindings of this session.
    pub registry: HashMap<String, Value>,
    /// Resolution of unbound symbols.
    pub mode:     ResolveMode,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with the default registry in [`ResolveMode::Free`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(ResolveMode::Free)
    }

    /// Creates a context with the default registry in
    /// [`ResolveMode::Strict`].
    #[must_use]
    pub fn strict() -> Self {
        Self::with_mode(ResolveMode::Strict)
    }

    /// Creates a context with the default registry and the given mode.
    #[must_use]
    pub fn with_mode(mode: ResolveMode) -> Self {
        Self { registry: default_registry(),
               mode }
    }

    /// Restores the registry to its defaults, dropping every user binding.
    pub fn reset(&mut self) {
        tracing::trace!(bindings = self.registry.len(), "resetting registry");
        self.registry = default_registry();
    }

    /// Looks up a binding.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.registry.get(name)
    }

    /// Parses and evaluates `source`, then formats the results.
    ///
    /// A program whose only result is a number prints it with
    /// [`Number::detailed_format`](crate::interpreter::value::number::Number::detailed_format);
    /// otherwise every result is printed on its own line.
    ///
    /// # Example
    /// ```
    /// use symcalc::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// assert_eq!(context.evaluate("a = 3").unwrap(), "");
    /// assert_eq!(context.evaluate("a * 2, a").unwrap(), "(6, 3)");
    /// ```
    pub fn evaluate(&mut self, source: &str) -> Result<String, Error> {
        let statements = parse_source(source)?;
        let results = self.eval_program(&statements)?;
        Ok(format_results(&results))
    }

    /// Evaluates statements in order and collects every non-`Null` result.
    ///
    /// The first failing statement aborts the program; its line is attached to
    /// the returned error.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn eval_program(&mut self, statements: &[Statement]) -> Result<Vec<Value>, Error> {
        let mut results = Vec::new();
        for statement in statements {
            let value = self.eval_statement(statement)
                            .map_err(|error| Error::Runtime { error,
                                                              line: statement.line() })?;
            if !value.is_null() {
                results.push(value);
            }
        }
        Ok(results)
    }

    /// Evaluates a single statement.
    ///
    /// An assignment binds its value and yields `Null`. A bare expression
    /// whose value is a function taking no arguments is invoked, which is how
    /// `clear` on its own resets the registry.
    #[tracing::instrument(level = "debug", skip_all, fields(line = statement.line()))]
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.registry.insert(name.clone(), value);
                Ok(Value::Null)
            },
            Statement::Expression { expr, .. } => match self.eval(expr)? {
                Value::Function(function) if function.arity == Some(0) => {
                    self.call_function(&function, Vec::new())
                },
                value => Ok(value),
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation; it dispatches
    /// on the expression variant.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::from(*value)),
            Expr::Symbol { name, .. } => self.resolve(name),
            Expr::Negate { expr, .. } => {
                let value = self.eval(expr)?;
                ops::neg(value)
            },
            Expr::Additive { operands,
                             operators,
                             .. } => self.eval_additive(operands, operators),
            Expr::Multiplicative { operands,
                                   operators,
                                   .. } => self.eval_multiplicative(operands, operators),
            Expr::Exponential { operands, .. } => self.eval_exponential(operands),
            Expr::Call { atoms, .. } => self.eval_call(atoms),
            Expr::Tuple { elements, .. } => {
                let values = elements.iter()
                                     .map(|element| self.eval(element))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::Tuple(values))
            },
        }
    }

    fn resolve(&self, name: &str) -> EvalResult<Value> {
        match (self.registry.get(name), self.mode) {
            (Some(value), _) => Ok(value.clone()),
            (None, ResolveMode::Free) => Ok(Value::symbol(name)),
            (None, ResolveMode::Strict) => Err(RuntimeError::UnboundSymbol { name: name.to_string() }),
        }
    }
}

/// Formats the results of a program for display.
fn format_results(results: &[Value]) -> String {
    match results {
        [Value::Number(number)] => number.detailed_format(),
        _ => results.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn bindings_persist_across_calls() {
        let mut context = Context::new();
        context.evaluate("x = 4").unwrap();
        assert_eq!(context.evaluate("x * x").unwrap(), "16");
    }

    #[test]
    fn clear_drops_user_bindings() {
        let mut context = Context::new();
        context.evaluate("x = 4; sin = cos").unwrap();
        context.evaluate("clear").unwrap();
        assert_eq!(context.get("x"), None);
        assert_eq!(context.evaluate("x, sin 0").unwrap(), "(x, 0)");
    }

    #[test]
    fn strict_mode_rejects_unbound_symbols() {
        let mut context = Context::strict();
        let error = context.evaluate("1\ny + 1").unwrap_err();
        assert_eq!(error.kind(), Some(ErrorKind::UnboundReference));
        assert_eq!(error.to_string(), "Error on line 2: Unknown symbol 'y'.");
    }

    #[test]
    fn strict_mode_still_sees_builtins() {
        let mut context = Context::strict();
        assert_eq!(context.evaluate("cos 0").unwrap(), "1");
    }

    #[test]
    fn several_results_join_on_lines() {
        let mut context = Context::new();
        assert_eq!(context.evaluate("1; 2; x").unwrap(), "1\n2\nx");
    }
}
