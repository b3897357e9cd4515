/// The `Value` enum and its formatting.
///
/// Defines every runtime value variant, the symbolic `Expression` printing
/// rules and the conversion helpers used by builtins.
pub mod core;
/// Callable values.
///
/// Defines `Function`, its arity check and the closed set of function bodies.
pub mod function;
/// Unit-tagged scalars.
///
/// Defines `Number` with its unit arithmetic, time conversions and the
/// detailed time breakdown.
pub mod number;
/// The operators of the value algebra.
///
/// Every operator is total: numbers compute, anything else becomes a symbolic
/// expression.
pub mod ops;
