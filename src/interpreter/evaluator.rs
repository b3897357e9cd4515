/// Operator chain evaluation.
///
/// Folds additive and multiplicative chains from the left and exponential
/// chains from the right over the value algebra.
pub mod binary;

/// Call chain evaluation.
///
/// Resolves juxtaposed atoms into function calls, unit tagging and mixed-unit
/// sums, and invokes functions.
pub mod call;

/// Core evaluation logic and context management.
///
/// Contains the `Context` with its registry and resolution mode, statement
/// and expression dispatch, and program output formatting.
pub mod core;

/// Builtin functions and the default registry.
pub mod function;
