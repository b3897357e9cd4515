/// The differentiation engine.
///
/// Computes derivatives of symbolic values with a fixed table of rules: sums
/// and differences, the product and quotient rules, constant powers and the
/// chain rule through `sqrt`, `ln`, `exp`, `sin`, `cos` and `tan`.
pub mod diff;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, resolves symbols against the registry of its
/// `Context`, folds operator chains over the value algebra and resolves call
/// chains into function calls and unit tagging.
///
/// # Responsibilities
/// - Evaluates statements and expressions in source order.
/// - Owns the registry and resets it on `clear`.
/// - Attaches the failing statement's line to runtime errors.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// numbers, identifiers, operators, delimiters and statement separators. It
/// tracks line numbers and drops comments.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A hand-written recursive descent parser over the token stream. Operator
/// chains are collected per precedence level; call chains and tuples are kept
/// as lists for the evaluator to interpret.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Reports syntax errors with the line they occurred on.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum with its variants (null, symbol,
/// number, function, tuple and symbolic expression), unit-tagged numbers and
/// the operators of the value algebra.
pub mod value;
