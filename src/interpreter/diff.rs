use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            core::Value,
            number::Number,
            ops::{add, div, mul, pow},
        },
    },
};

/// Differentiates `f` with respect to the symbol named `var`.
///
/// Works on the value tree directly. Results are assembled with the value
/// operators, so numeric parts fold as they are built (`3 * 1` becomes `3`)
/// while symbolic parts stay as expressions. No further simplification is
/// done.
///
/// Values that are neither numbers, symbols nor expressions come back as the
/// unevaluated `diff(f, var)`.
///
/// # Errors
/// - `DiffArity` when `*`, `/`, `^` do not have exactly two operands, or a
///   unary function does not have exactly one.
/// - `UnsupportedDerivative` for a non-constant exponent or a head without a
///   rule.
///
/// # Example
/// ```
/// use symcalc::interpreter::{diff::differentiate, value::core::Value};
///
/// let cube = Value::expression("^", vec![Value::symbol("x"), Value::from(3.0)]);
/// let derivative = differentiate(&cube, "x").unwrap();
/// assert_eq!(derivative.to_string(), "((3 * (x ^ 2)) * 1)");
/// ```
pub fn differentiate(f: &Value, var: &str) -> EvalResult<Value> {
    match f {
        Value::Number(_) => Ok(Value::from(0.0)),
        Value::Symbol(name) => Ok(Value::from(if name == var { 1.0 } else { 0.0 })),
        Value::Expression { head, arguments } => {
            tracing::debug!(%head, operands = arguments.len(), var, "differentiating");
            differentiate_expression(f, head, arguments, var)
        },
        Value::Null | Value::Function(_) | Value::Tuple(_) => {
            Ok(Value::expression("diff", vec![f.clone(), Value::symbol(var)]))
        },
    }
}

fn differentiate_expression(f: &Value, head: &str, arguments: &[Value], var: &str) -> EvalResult<Value> {
    let d = |value: &Value| differentiate(value, var);

    match head {
        "+" | "-" => {
            let terms = arguments.iter()
                                 .map(d)
                                 .filter(|term| !matches!(term, Ok(t) if t.is_zero()))
                                 .collect::<EvalResult<Vec<_>>>()?;
            Ok(Value::expression(head, terms))
        },
        "*" => {
            let [left, right] = binary_operands(head, arguments)?;
            let terms = [mul(left.clone(), d(right)?)?, mul(right.clone(), d(left)?)?];
            Ok(Value::expression("+", terms.into_iter().filter(|t| !is_known_zero(t)).collect()))
        },
        "/" => {
            let [numerator, denominator] = binary_operands(head, arguments)?;
            let terms = [mul(denominator.clone(), d(numerator)?)?, mul(numerator.clone(), d(denominator)?)?];
            let difference = Value::expression("-", terms.into_iter().filter(|t| !is_known_zero(t)).collect());
            div(difference, pow(denominator.clone(), Value::from(2.0))?)
        },
        "^" => {
            let [base, exponent] = binary_operands(head, arguments)?;
            let Value::Number(n) = exponent else {
                return Err(RuntimeError::UnsupportedDerivative { details: format!("only constant exponents are supported, found '{exponent}'") });
            };
            let lowered = pow(base.clone(), Value::from(Number::new(n.value - 1.0)))?;
            mul(mul(exponent.clone(), lowered)?, d(base)?)
        },
        "sqrt" => {
            let x = unary_operand(head, arguments)?;
            div(mul(Value::from(0.5), d(x)?)?, Value::expression("sqrt", vec![x.clone()]))
        },
        "ln" => {
            let x = unary_operand(head, arguments)?;
            div(d(x)?, x.clone())
        },
        "exp" => {
            let x = unary_operand(head, arguments)?;
            mul(Value::expression("exp", vec![x.clone()]), d(x)?)
        },
        "sin" => {
            let x = unary_operand(head, arguments)?;
            mul(Value::expression("cos", vec![x.clone()]), d(x)?)
        },
        "cos" => {
            let x = unary_operand(head, arguments)?;
            let sin = Value::expression("sin", vec![x.clone()]);
            mul(mul(Value::from(-1.0), sin)?, d(x)?)
        },
        "tan" => {
            let x = unary_operand(head, arguments)?;
            let tan_squared = pow(Value::expression("tan", vec![x.clone()]), Value::from(2.0))?;
            mul(add(Value::from(1.0), tan_squared)?, d(x)?)
        },
        _ => Err(RuntimeError::UnsupportedDerivative { details: format!("no rule for '{head}' in '{f}'") }),
    }
}

/// A term that is certainly zero: a zero number, or an expression with a
/// literal zero operand (the product rule only builds products).
fn is_known_zero(term: &Value) -> bool {
    match term {
        Value::Expression { arguments, .. } => arguments.iter().any(Value::is_zero),
        other => other.is_zero(),
    }
}

fn binary_operands<'a>(head: &str, arguments: &'a [Value]) -> EvalResult<[&'a Value; 2]> {
    match arguments {
        [left, right] => Ok([left, right]),
        _ => Err(RuntimeError::DiffArity { operator: head.to_string(),
                                           found:    arguments.len(), }),
    }
}

fn unary_operand<'a>(head: &str, arguments: &'a [Value]) -> EvalResult<&'a Value> {
    match arguments {
        [x] => Ok(x),
        _ => Err(RuntimeError::DiffArity { operator: head.to_string(),
                                           found:    arguments.len(), }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, interpreter::value::ops};

    fn x() -> Value {
        Value::symbol("x")
    }

    fn n(value: f64) -> Value {
        Value::from(value)
    }

    /// Evaluates a derivative tree at `x = at`, applying arithmetic heads
    /// left to right.
    fn evaluate_at(value: &Value, at: f64) -> f64 {
        match value {
            Value::Number(number) => number.value,
            Value::Symbol(name) if name == "x" => at,
            Value::Expression { head, arguments } => {
                let mut values = arguments.iter().map(|a| evaluate_at(a, at));
                let Some(first) = values.next() else {
                    return 0.0;
                };
                values.fold(first, |acc, v| match head.as_str() {
                          "+" => acc + v,
                          "-" => acc - v,
                          "*" => acc * v,
                          "/" => acc / v,
                          "^" => acc.powf(v),
                          other => panic!("unexpected head '{other}'"),
                      })
            },
            other => panic!("unexpected value '{other}'"),
        }
    }

    #[test]
    fn second_derivative_of_a_cube() {
        let cube = ops::pow(x(), n(3.0)).unwrap();
        let first = differentiate(&cube, "x").unwrap();
        let second = differentiate(&first, "x").unwrap();

        assert_eq!(second.to_string(), "(1 * (3 * ((2 * (x ^ 1)) * 1)))");
        for at in [-2.0, 0.0, 1.5, 4.0] {
            assert_eq!(evaluate_at(&second, at), 6.0 * at);
        }
    }

    #[test]
    fn constants_and_other_symbols_vanish() {
        assert_eq!(differentiate(&n(42.0), "x").unwrap(), n(0.0));
        assert_eq!(differentiate(&Value::symbol("y"), "x").unwrap(), n(0.0));
        assert_eq!(differentiate(&x(), "x").unwrap(), n(1.0));
    }

    #[test]
    fn sums_drop_zero_terms() {
        let sum = ops::add(x(), Value::symbol("y")).unwrap();
        assert_eq!(differentiate(&sum, "x").unwrap().to_string(), "1");
    }

    #[test]
    fn differences_drop_zero_terms() {
        let difference = ops::sub(n(5.0), x()).unwrap();
        assert_eq!(differentiate(&difference, "x").unwrap().to_string(), "1");

        let difference = ops::sub(Value::symbol("y"), x()).unwrap();
        assert_eq!(differentiate(&difference, "x").unwrap().to_string(), "1");

        let difference = ops::sub(x(), Value::symbol("y")).unwrap();
        assert_eq!(differentiate(&difference, "x").unwrap().to_string(), "1");
    }

    #[test]
    fn quotient_rule() {
        let reciprocal = ops::div(n(1.0), x()).unwrap();
        assert_eq!(differentiate(&reciprocal, "x").unwrap().to_string(), "(1 / (x ^ 2))");

        let ratio = ops::div(x(), Value::symbol("y")).unwrap();
        assert_eq!(differentiate(&ratio, "y").unwrap().to_string(), "((x * 1) / (y ^ 2))");

        // d(x / 2) = 1 / 2
        let half = ops::div(x(), n(2.0)).unwrap();
        assert_eq!(evaluate_at(&differentiate(&half, "x").unwrap(), 7.0), 0.5);
    }

    #[test]
    fn chain_rule_through_sine() {
        let e = Value::expression("sin", vec![ops::mul(n(2.0), x()).unwrap()]);
        assert_eq!(differentiate(&e, "x").unwrap().to_string(), "(cos((2 * x)) * 2)");
    }

    #[test]
    fn three_operand_product_is_an_arity_error() {
        let product = Value::expression("*", vec![x(), x(), x()]);
        let error = differentiate(&product, "x").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Arity);
    }

    #[test]
    fn symbolic_exponent_is_unsupported() {
        let power = ops::pow(x(), Value::symbol("y")).unwrap();
        let error = differentiate(&power, "x").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnsupportedOperation);
    }

    #[test]
    fn unknown_heads_are_unsupported() {
        let e = Value::expression("atan", vec![x()]);
        assert_eq!(differentiate(&e, "x").unwrap_err().kind(), ErrorKind::UnsupportedOperation);
    }

    #[test]
    fn tuples_stay_unevaluated() {
        let tuple = Value::Tuple(vec![x(), n(1.0)]);
        assert_eq!(differentiate(&tuple, "x").unwrap().to_string(), "diff((x, 1), x)");
    }
}
