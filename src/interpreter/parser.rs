/// Expression entry points.
///
/// Contains the top of the expression grammar: the `expression` rule and
/// assignment handling, plus the shared parse result type.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels: equality, comparison,
/// term and factor.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles prefix operators, literals, variables and parenthesized groups,
/// the highest-precedence end of the grammar.
pub mod unary;

/// Statement parsing.
///
/// Implements declarations, `print` statements, blocks, expression statements
/// and the whole-program rule.
pub mod statement;
