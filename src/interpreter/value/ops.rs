use crate::interpreter::{
    evaluator::core::EvalResult,
    value::{core::Value, number::Number},
};

/// Applies `numeric` when both operands are numbers; otherwise builds the
/// symbolic `Expression(head, [left, right])`.
fn combine(head: &str,
           left: Value,
           right: Value,
           numeric: impl FnOnce(&Number, &Number) -> EvalResult<Number>)
           -> EvalResult<Value> {
    match (&left, &right) {
        (Value::Number(l), Value::Number(r)) => numeric(l, r).map(Value::Number),
        _ => Ok(Value::expression(head, vec![left, right])),
    }
}

/// Adds two values.
///
/// # Example
/// ```
/// use symcalc::interpreter::value::{core::Value, ops::add};
///
/// assert_eq!(add(2.0.into(), 3.0.into()).unwrap(), Value::from(5.0));
/// assert_eq!(add(Value::symbol("x"), 1.0.into()).unwrap().to_string(), "(x + 1)");
/// ```
pub fn add(left: Value, right: Value) -> EvalResult<Value> {
    combine("+", left, right, Number::try_add)
}

/// Subtracts `right` from `left`.
pub fn sub(left: Value, right: Value) -> EvalResult<Value> {
    combine("-", left, right, Number::try_sub)
}

/// Multiplies two values.
pub fn mul(left: Value, right: Value) -> EvalResult<Value> {
    combine("*", left, right, Number::try_mul)
}

/// Divides `left` by `right`. Division by zero is not an error.
///
/// # Example
/// ```
/// use symcalc::interpreter::value::ops::div;
///
/// assert_eq!(div(1.0.into(), 0.0.into()).unwrap().to_string(), "Infinity");
/// ```
pub fn div(left: Value, right: Value) -> EvalResult<Value> {
    combine("/", left, right, |l, r| Ok(l.div(r)))
}

/// Remainder of `left` divided by `right`.
pub fn rem(left: Value, right: Value) -> EvalResult<Value> {
    combine("%", left, right, |l, r| Ok(l.modulo(r)))
}

/// Raises `base` to `exponent`.
pub fn pow(base: Value, exponent: Value) -> EvalResult<Value> {
    combine("^", base, exponent, |b, e| Ok(b.power(e)))
}

/// Negates a value by multiplying it with `-1`.
pub fn neg(value: Value) -> EvalResult<Value> {
    mul(Value::from(-1.0), value)
}
