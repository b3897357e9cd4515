/// Numeric conversion helpers.
///
/// This module provides safe functions for converting floating-point values to
/// integers without silent data loss. The number formatter relies on them to
/// decide when a value prints as an integer literal.
pub mod num;
