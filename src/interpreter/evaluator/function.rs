/// Built-in function implementations.
///
/// Contains the trigonometric, unary and binary numeric functions and the
/// `diff` entry point into the differentiation engine.
pub mod builtin;

/// The builtin table and the default registry.
pub mod core;
