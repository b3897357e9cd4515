use std::collections::HashMap;

use crate::interpreter::{
    evaluator::function::builtin,
    value::{
        core::Value,
        function::{BuiltinFn, Function},
    },
};

/// Name of the registry-reset function.
pub const CLEAR: &str = "clear";

/// Constants present in every fresh registry.
pub const CONSTANTS: &[(&str, f64)] = &[("PI", std::f64::consts::PI), ("E", std::f64::consts::E)];

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact arity,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table used to seed registries),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"      => { arity: 1, func: builtin::sin },
    "cos"      => { arity: 1, func: builtin::cos },
    "tan"      => { arity: 1, func: builtin::tan },
    "cot"      => { arity: 1, func: builtin::cot },
    "asin"     => { arity: 1, func: builtin::asin },
    "acos"     => { arity: 1, func: builtin::acos },
    "atan"     => { arity: 1, func: builtin::atan },
    "sinh"     => { arity: 1, func: builtin::sinh },
    "cosh"     => { arity: 1, func: builtin::cosh },
    "tanh"     => { arity: 1, func: builtin::tanh },
    "asinh"    => { arity: 1, func: builtin::asinh },
    "acosh"    => { arity: 1, func: builtin::acosh },
    "atanh"    => { arity: 1, func: builtin::atanh },
    "sqrt"     => { arity: 1, func: builtin::sqrt },
    "exp"      => { arity: 1, func: builtin::exp },
    "ln"       => { arity: 1, func: builtin::ln },
    "ceil"     => { arity: 1, func: builtin::ceil },
    "floor"    => { arity: 1, func: builtin::floor },
    "truncate" => { arity: 1, func: builtin::truncate },
    "round"    => { arity: 1, func: builtin::round },
    "abs"      => { arity: 1, func: builtin::abs },
    "sign"     => { arity: 1, func: builtin::sign },
    "atan2"    => { arity: 2, func: |args| builtin::binary("atan2", args, f64::atan2) },
    "hypot"    => { arity: 2, func: |args| builtin::binary("hypot", args, f64::hypot) },
    "log"      => { arity: 2, func: |args| builtin::binary("log", args, builtin::log) },
    "min"      => { arity: 2, func: |args| builtin::binary("min", args, f64::min) },
    "max"      => { arity: 2, func: |args| builtin::binary("max", args, f64::max) },
    "+"        => { arity: 2, func: |args| builtin::binary("+", args, |x, y| x + y) },
    "-"        => { arity: 2, func: |args| builtin::binary("-", args, |x, y| x - y) },
    "*"        => { arity: 2, func: |args| builtin::binary("*", args, |x, y| x * y) },
    "/"        => { arity: 2, func: |args| builtin::binary("/", args, |x, y| x / y) },
    "%"        => { arity: 2, func: |args| builtin::binary("%", args, |x, y| x % y) },
    "^"        => { arity: 2, func: |args| builtin::binary("^", args, f64::powf) },
    "**"       => { arity: 2, func: |args| builtin::binary("**", args, f64::powf) },
    "diff"     => { arity: 2, func: builtin::diff },
}

/// Builds the registry every session starts from, and that `clear` restores:
/// the constants, every builtin and `clear` itself.
///
/// # Example
/// ```
/// use symcalc::interpreter::{evaluator::function::core::default_registry, value::core::Value};
///
/// let registry = default_registry();
/// assert_eq!(registry["PI"], Value::from(std::f64::consts::PI));
/// assert!(matches!(registry["clear"], Value::Function(_)));
/// ```
#[must_use]
pub fn default_registry() -> HashMap<String, Value> {
    let constants = CONSTANTS.iter()
                             .map(|(name, value)| ((*name).to_string(), Value::from(*value)));
    let functions = BUILTIN_TABLE.iter().map(|def| {
                                            (def.name.to_string(),
                                             Value::from(Function::builtin(def.name,
                                                                           Some(def.arity),
                                                                           def.func)))
                                        });
    let clear = std::iter::once((CLEAR.to_string(), Value::from(Function::clear(CLEAR))));

    constants.chain(functions).chain(clear).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_is_registered_as_a_function() {
        let registry = default_registry();
        for name in BUILTIN_FUNCTIONS {
            let Some(Value::Function(function)) = registry.get(*name) else {
                panic!("builtin '{name}' is missing");
            };
            assert_eq!(function.name, *name);
        }
        assert_eq!(registry.len(), BUILTIN_FUNCTIONS.len() + CONSTANTS.len() + 1);
    }

    #[test]
    fn operator_handles_compute_on_numbers() {
        let registry = default_registry();
        let Some(Value::Function(minus)) = registry.get("-") else {
            panic!("'-' is missing");
        };
        let crate::interpreter::value::function::FunctionBody::Builtin(body) = minus.body else {
            panic!("'-' is not a builtin");
        };
        assert_eq!(body(&[Value::from(5.0), Value::from(7.0)]).unwrap(), Value::from(-2.0));
    }
}
