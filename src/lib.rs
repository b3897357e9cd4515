//! # symcalc
//!
//! symcalc is a small expression-language calculator written in Rust.
//! It parses and evaluates arithmetic programs with assignments, unit-tagged
//! numbers, tuples, free symbols that build symbolic expressions, and symbolic
//! differentiation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::Error, interpreter::evaluator::core::Context};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches line numbers to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// evaluation or differentiation, and the top-level `Error` that carries the
/// line of the failing statement.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and differentiation.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Evaluates a program in a fresh session and returns its formatted output.
///
/// Every statement that yields a value contributes one line. A program whose
/// only result is a number prints it in detail; for a duration in seconds that
/// includes a day/hour/minute/second breakdown.
///
/// # Errors
/// Returns an error if parsing fails or any statement fails to evaluate.
///
/// # Examples
/// ```
/// use symcalc::evaluate;
///
/// assert_eq!(evaluate("2 ^ 2 ^ 3").unwrap(), "256");
/// assert_eq!(evaluate("a = 3; xa = 21\nxa * a\nPI / PI").unwrap(), "63\n1");
/// assert_eq!(evaluate("diff(x ^ 2, x)").unwrap(), "((2 * (x ^ 1)) * 1)");
///
/// // Numbers cannot be applied to numbers.
/// assert!(evaluate("5 5").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<String, Error> {
    Context::new().evaluate(source)
}
