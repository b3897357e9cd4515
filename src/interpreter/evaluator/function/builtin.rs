use crate::{
    error::RuntimeError,
    interpreter::{
        diff::differentiate,
        evaluator::core::EvalResult,
        value::{core::Value, number::Number},
    },
};

/// Checks the argument count of a builtin called directly and returns the
/// arguments as a fixed-size array.
fn expect_args<'a, const N: usize>(name: &str, args: &'a [Value]) -> EvalResult<&'a [Value; N]> {
    args.try_into()
        .map_err(|_| RuntimeError::ArityMismatch { name:     name.to_string(),
                                                   expected: N,
                                                   found:    args.len(), })
}

/// Returns the bare value of a number that must not carry a unit.
fn unitless(name: &str, number: &Number) -> EvalResult<f64> {
    match &number.unit {
        None => Ok(number.value),
        Some(unit) => {
            Err(RuntimeError::UnitMismatch { details: format!("'{name}' does not accept a number in '{unit}'") })
        },
    }
}

/// Defines a trigonometric builtin taking one angle.
///
/// The generated function accepts exactly one argument.
/// - A unitless number is read as radians.
/// - A number in `deg` is converted to radians first.
/// - Any other unit is a `UnitMismatch` error.
/// - Any non-number produces the symbolic `name(argument)`.
///
/// # Example
/// ```
/// use symcalc::interpreter::{
///     evaluator::function::builtin::sin,
///     value::{core::Value, number::Number},
/// };
///
/// let right_angle = Value::from(Number::with_unit_label(90.0, "deg"));
/// assert_eq!(sin(&[right_angle]).unwrap(), Value::from(1.0));
/// assert_eq!(sin(&[Value::symbol("x")]).unwrap().to_string(), "sin(x)");
/// ```
macro_rules! angle_builtin {
    ($fname:ident, $action:expr) => {
        pub fn $fname(args: &[Value]) -> EvalResult<Value> {
            let name = stringify!($fname);
            let [value] = expect_args::<1>(name, args)?;

            let Value::Number(number) = value else {
                return Ok(Value::expression(name, args.to_vec()));
            };
            let radians = match number.unit.as_deref() {
                None => number.value,
                Some("deg") => number.value.to_radians(),
                Some(unit) => {
                    return Err(RuntimeError::UnitMismatch { details: format!("'{name}' accepts radians or 'deg', not '{unit}'") });
                },
            };
            let action: fn(f64) -> f64 = $action;
            Ok(Value::from(action(radians)))
        }
    };
}

angle_builtin!(sin, f64::sin);
angle_builtin!(cos, f64::cos);
angle_builtin!(tan, f64::tan);
angle_builtin!(cot, |x| 1.0 / x.tan());

/// Defines a builtin of one unitless number.
///
/// The generated function accepts exactly one argument. A number with a unit
/// is a `UnitMismatch` error, and any non-number produces the symbolic
/// `name(argument)`.
///
/// # Example
/// ```
/// use symcalc::interpreter::{evaluator::function::builtin::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&[Value::from(9.0)]).unwrap(), Value::from(3.0));
/// assert_eq!(sqrt(&[Value::symbol("y")]).unwrap().to_string(), "sqrt(y)");
/// ```
macro_rules! unary_builtin {
    ($fname:ident, $action:expr) => {
        pub fn $fname(args: &[Value]) -> EvalResult<Value> {
            let name = stringify!($fname);
            let [value] = expect_args::<1>(name, args)?;

            let Value::Number(number) = value else {
                return Ok(Value::expression(name, args.to_vec()));
            };
            let action: fn(f64) -> f64 = $action;
            Ok(Value::from(action(unitless(name, number)?)))
        }
    };
}

unary_builtin!(asin, f64::asin);
unary_builtin!(acos, f64::acos);
unary_builtin!(atan, f64::atan);
unary_builtin!(sinh, f64::sinh);
unary_builtin!(cosh, f64::cosh);
unary_builtin!(tanh, f64::tanh);
unary_builtin!(asinh, f64::asinh);
unary_builtin!(acosh, f64::acosh);
unary_builtin!(atanh, f64::atanh);
unary_builtin!(sqrt, f64::sqrt);
unary_builtin!(exp, f64::exp);
unary_builtin!(ln, f64::ln);
unary_builtin!(ceil, f64::ceil);
unary_builtin!(floor, f64::floor);
unary_builtin!(truncate, f64::trunc);
unary_builtin!(round, f64::round_ties_even);
unary_builtin!(abs, f64::abs);
unary_builtin!(sign, |x| if x == 0.0 { 0.0 } else { x.signum() });

/// Applies a binary builtin to two unitless numbers.
///
/// Used for `atan2`, `hypot`, `log`, `min`, `max` and the operator handles.
///
/// # Errors
/// - `TypeMismatch` if either argument is not a number.
/// - `UnitMismatch` if either number carries a unit.
///
/// # Example
/// ```
/// use symcalc::interpreter::{evaluator::function::builtin::binary, value::core::Value};
///
/// let max = binary("max", &[Value::from(2.0), Value::from(5.0)], f64::max).unwrap();
/// assert_eq!(max, Value::from(5.0));
/// ```
pub fn binary(name: &str, args: &[Value], action: fn(f64, f64) -> f64) -> EvalResult<Value> {
    let [x, y] = expect_args::<2>(name, args)?;
    let x = unitless(name, x.as_number()?)?;
    let y = unitless(name, y.as_number()?)?;
    Ok(Value::from(action(x, y)))
}

/// Logarithm of `x` in the given base, `ln x / ln base`.
#[must_use]
pub fn log(x: f64, base: f64) -> f64 {
    x.ln() / base.ln()
}

/// Differentiates its first argument with respect to the symbol given as the
/// second.
///
/// # Errors
/// `TypeMismatch` if the second argument is not a symbol, plus any error of
/// the differentiation engine.
pub fn diff(args: &[Value]) -> EvalResult<Value> {
    let [expr, var] = expect_args::<2>("diff", args)?;
    differentiate(expr, var.as_symbol()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn n(value: f64) -> Value {
        Value::from(value)
    }

    #[test]
    fn angles_accept_degrees_only() {
        let half_turn = Value::from(Number::with_unit_label(180.0, "deg"));
        assert_eq!(cos(&[half_turn]).unwrap(), n(-1.0));

        let error = cos(&[Value::from(Number::with_unit_label(1.0, "s"))]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Unit);
    }

    #[test]
    fn unary_functions_reject_units() {
        let error = sqrt(&[Value::from(Number::with_unit_label(4.0, "deg"))]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Unit);
    }

    #[test]
    fn round_goes_to_even() {
        assert_eq!(round(&[n(2.5)]).unwrap(), n(2.0));
        assert_eq!(round(&[n(3.5)]).unwrap(), n(4.0));
        assert_eq!(round(&[n(-0.5)]).unwrap().to_string(), "0");
    }

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(&[n(0.0)]).unwrap(), n(0.0));
        assert_eq!(sign(&[n(-3.0)]).unwrap(), n(-1.0));
    }

    #[test]
    fn atanh_is_its_own_function() {
        assert_eq!(atanh(&[n(0.5)]).unwrap(), n(0.5_f64.atanh()));
        assert_eq!(atanh(&[Value::symbol("x")]).unwrap().to_string(), "atanh(x)");
    }

    #[test]
    fn binary_functions_need_numbers() {
        let error = binary("hypot", &[n(3.0), Value::symbol("x")], f64::hypot).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TypeMismatch);
        assert_eq!(binary("hypot", &[n(3.0), n(4.0)], f64::hypot).unwrap(), n(5.0));
    }

    #[test]
    fn log_divides_natural_logarithms() {
        assert_eq!(log(8.0, 2.0), 8.0_f64.ln() / 2.0_f64.ln());
    }

    #[test]
    fn diff_needs_a_symbol() {
        let error = diff(&[Value::symbol("x"), n(1.0)]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn direct_calls_check_arity() {
        let error = sin(&[]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Arity);
    }
}
