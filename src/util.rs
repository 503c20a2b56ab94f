/// Formatting helpers shared by tokens, AST printing and runtime values.
pub mod fmt;
