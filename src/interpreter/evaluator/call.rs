use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            core::Value,
            function::{Function, FunctionBody},
            number::Number,
        },
    },
};

impl Context {
    /// Evaluates a chain of juxtaposed atoms.
    ///
    /// A chain made only of `(Number, Symbol)` pairs, such as `1h 30m`, is a
    /// mixed-unit literal: each number takes its unit and the results are
    /// summed. Any other chain is reduced from the right:
    /// - a function applied to a tuple receives the tuple's elements as
    ///   arguments, otherwise the single value;
    /// - a number applied to a symbol takes that symbol as its unit.
    ///
    /// A symbol directly after a number literal is read as a unit name, so
    /// strict mode does not reject it.
    ///
    /// # Errors
    /// `UnsupportedCall` for any other pairing, plus errors of the called
    /// function.
    pub(crate) fn eval_call(&mut self, atoms: &[Expr]) -> EvalResult<Value> {
        let mut values = Vec::with_capacity(atoms.len());
        for (index, atom) in atoms.iter().enumerate() {
            let follows_number = index > 0 && matches!(atoms[index - 1], Expr::Number { .. });
            let value = match atom {
                Expr::Symbol { name, .. } if follows_number => {
                    self.get(name).cloned().unwrap_or_else(|| Value::symbol(name))
                },
                _ => self.eval(atom)?,
            };
            values.push(value);
        }

        if let Some(sum) = unit_pairs_sum(&values)? {
            return Ok(sum);
        }

        let Some(mut acc) = values.pop() else {
            return Ok(Value::Null);
        };
        while let Some(callee) = values.pop() {
            acc = self.apply(callee, acc)?;
        }
        Ok(acc)
    }

    /// Applies one element of a call chain to the value on its right.
    fn apply(&mut self, callee: Value, argument: Value) -> EvalResult<Value> {
        match (callee, argument) {
            (Value::Function(function), Value::Tuple(arguments)) => {
                self.call_function(&function, arguments)
            },
            (Value::Function(function), argument) => self.call_function(&function, vec![argument]),
            (Value::Number(number), Value::Symbol(unit)) => {
                Ok(Value::Number(number.with_unit(&unit)?))
            },
            (Value::Number(number), argument) => {
                Err(RuntimeError::UnsupportedCall { details: format!("number '{number}' cannot be applied to '{argument}'") })
            },
            (callee, argument) => {
                Err(RuntimeError::UnsupportedCall { details: format!("{} '{callee}' cannot be applied to '{argument}'",
                                                                     callee.variant_name()) })
            },
        }
    }

    /// Invokes a function with already evaluated arguments.
    ///
    /// # Errors
    /// `ArityMismatch` if the argument count differs from the declared arity,
    /// plus any error of the function body.
    pub fn call_function(&mut self, function: &Function, arguments: Vec<Value>) -> EvalResult<Value> {
        function.check_arity(arguments.len())?;

        match function.body {
            FunctionBody::Builtin(body) => {
                tracing::trace!(name = %function.name, arguments = arguments.len(), "calling builtin");
                body(&arguments)
            },
            FunctionBody::Clear => {
                self.reset();
                Ok(Value::Null)
            },
        }
    }
}

/// Sums a chain of `(Number, Symbol)` pairs as unit-tagged numbers.
///
/// Returns `Ok(None)` when the chain does not have that shape.
fn unit_pairs_sum(values: &[Value]) -> EvalResult<Option<Value>> {
    if values.is_empty() || !values.len().is_multiple_of(2) {
        return Ok(None);
    }

    let mut tagged = Vec::with_capacity(values.len() / 2);
    for pair in values.chunks_exact(2) {
        let [Value::Number(number), Value::Symbol(unit)] = pair else {
            return Ok(None);
        };
        tagged.push((number, unit));
    }

    let mut sum: Option<Number> = None;
    for (number, unit) in tagged {
        let next = number.with_unit(unit)?;
        sum = Some(match sum {
                       Some(acc) => acc.try_add(&next)?,
                       None => next,
                   });
    }
    Ok(sum.map(Value::Number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn number(value: f64) -> Expr {
        Expr::Number { value, line: 1 }
    }

    fn symbol(name: &str) -> Expr {
        Expr::Symbol { name: name.to_string(),
                       line: 1, }
    }

    #[test]
    fn unit_pairs_are_summed_in_seconds() {
        let mut context = Context::new();
        let value = context.eval_call(&[number(1.0), symbol("h"), number(30.0), symbol("m")])
                           .unwrap();
        assert_eq!(value, Value::from(Number::with_unit_label(5_400.0, "s")));
    }

    #[test]
    fn chains_reduce_from_the_right() {
        let mut context = Context::new();
        let value = context.eval_call(&[symbol("cos"), symbol("sin"), number(0.0)])
                           .unwrap();
        assert_eq!(value, Value::from(1.0));
    }

    #[test]
    fn number_before_a_non_symbol_is_unsupported() {
        let mut context = Context::new();
        let error = context.eval_call(&[number(5.0), number(5.0), number(6.0)])
                           .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnsupportedOperation);
    }

    #[test]
    fn units_after_numbers_resolve_in_strict_mode() {
        let mut context = Context::strict();
        let value = context.eval_call(&[symbol("sin"), number(90.0), symbol("deg")])
                           .unwrap();
        assert_eq!(value, Value::from(1.0));
    }

    #[test]
    fn wrong_argument_count_is_an_arity_error() {
        let mut context = Context::new();
        let log = context.get("log").cloned().unwrap();
        let Value::Function(log) = log else {
            panic!("log is not a function");
        };
        let error = context.call_function(&log, vec![Value::from(1.0)]).unwrap_err();
        assert_eq!(error,
                   RuntimeError::ArityMismatch { name:     "log".to_string(),
                                                 expected: 2,
                                                 found:    1, });
    }
}
