mod lexical_error;
mod parse_error;
mod runtime_error;

pub use lexical_error::LexicalError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
