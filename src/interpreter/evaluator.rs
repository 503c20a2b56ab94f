/// Core execution logic and interpreter state.
///
/// Contains the main execution engine: statement dispatch, block scoping,
/// expression evaluation and the output sink.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// string concatenation, comparisons and equality.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix operators, arithmetic negation and logical NOT.
pub mod unary;
