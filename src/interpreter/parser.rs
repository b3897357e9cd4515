/// Core parsing entry points.
///
/// Tokenizes source text and parses whole programs and full (possibly
/// comma separated) expressions.
pub mod core;

/// Binary operator chains.
///
/// Parses the additive, multiplicative and exponential precedence levels.
pub mod binary;

/// Signed atoms, call chains and atoms.
///
/// Parses leading signs, juxtaposition (`sin 0`, `2 deg`) and the atomic
/// forms: numbers, symbols and parenthesized expressions.
pub mod unary;

/// Statement parsing.
///
/// Distinguishes assignments from bare expression statements.
pub mod statement;
