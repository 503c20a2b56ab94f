//! # minilox
//!
//! minilox is a tree-walking interpreter for a small, dynamically typed
//! scripting language. It scans, parses and evaluates programs with support
//! for variables, lexical block scoping, and a `print` statement.

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

use std::io::Write;

use crate::{
    ast::Stmt,
    error::{LexicalError, ParseError, RuntimeError},
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::statement::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches metadata (such as source locations) to AST nodes for error
///   reporting.
/// - Renders nodes as S-expressions for the parse mode of the CLI.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General helpers shared across phases.
///
/// # Responsibilities
/// - Provides the number formatting rule shared by tokens, AST printing and
///   runtime values.
pub mod util;

/// Represents a failed run of the pipeline.
///
/// The three variants mirror the three phases. Errors are plain data; this
/// type's `Display` is where the `[line N] Error: <message>` report format
/// lives, and [`exit_code`](Self::exit_code) is where process exit codes are
/// decided.
#[derive(Debug)]
pub enum RunError {
    /// One or more lexical errors. Scanning accumulates these instead of
    /// stopping at the first.
    Lexical(Vec<LexicalError>),
    /// The first syntax error; parsing is fail-fast.
    Parse(ParseError),
    /// The first runtime error; execution halts there.
    Runtime(RuntimeError),
}

impl RunError {
    /// Maps the failure to its conventional process exit code: 65 for
    /// lexical and syntax errors, 70 for runtime errors.
    ///
    /// # Example
    /// ```
    /// use minilox::run_to;
    ///
    /// let mut out = Vec::new();
    /// let error = run_to("print +;", &mut out, false).unwrap_err();
    ///
    /// assert_eq!(error.exit_code(), 65);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Lexical(_) | Self::Parse(_) => 65,
            Self::Runtime(_) => 70,
        }
    }
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(errors) => {
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "[line {}] Error: {error}", error.line())?;
                }
                Ok(())
            },
            Self::Parse(error) => write!(f, "[line {}] Error: {error}", error.line()),
            Self::Runtime(error) => write!(f, "[line {}] Error: {error}", error.line()),
        }
    }
}

impl std::error::Error for RunError {}

/// Scans and parses a source text into a program.
///
/// # Parameters
/// - `source`: Raw source text.
///
/// # Returns
/// The statements in source order.
///
/// # Errors
/// - `RunError::Lexical` with every lexical error found.
/// - `RunError::Parse` with the first syntax error.
///
/// # Example
/// ```
/// use minilox::parse_source;
///
/// let program = parse_source("print (1 + 2);").unwrap();
///
/// assert_eq!(program[0].to_string(), "(print (group (+ 1.0 2.0)))");
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Stmt>, RunError> {
    let (tokens, errors) = scan(source);

    if !errors.is_empty() {
        return Err(RunError::Lexical(errors));
    }

    parse_program(&mut tokens.iter().peekable()).map_err(RunError::Parse)
}

/// Runs a program, writing `print` output to the given sink.
///
/// This is the full pipeline: scan, parse, evaluate. Output produced before
/// a runtime error stays in the sink.
///
/// # Parameters
/// - `source`: Raw source text.
/// - `out`: Sink for `print` output.
/// - `legacy_nil_equality`: Enables the historical equality rule where a
///   lone `nil` left operand compares equal to anything.
///
/// # Errors
/// The first failure of whichever phase broke, as a [`RunError`].
///
/// # Example
/// ```
/// use minilox::run_to;
///
/// let mut out = Vec::new();
/// run_to("var x = 2; print x * 3;", &mut out, false).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "6.0\n");
/// ```
pub fn run_to(source: &str,
              out: &mut dyn Write,
              legacy_nil_equality: bool)
              -> Result<(), RunError> {
    let program = parse_source(source)?;

    let mut interpreter = if legacy_nil_equality {
        Interpreter::with_legacy_nil_equality(out)
    } else {
        Interpreter::new(out)
    };

    interpreter.interpret(&program).map_err(RunError::Runtime)
}

/// Runs a program, writing `print` output to stdout.
///
/// Convenience wrapper over [`run_to`] for the CLI.
///
/// # Errors
/// The first failure of whichever phase broke, as a [`RunError`].
pub fn run(source: &str, legacy_nil_equality: bool) -> Result<(), RunError> {
    let mut stdout = std::io::stdout();
    run_to(source, &mut stdout, legacy_nil_equality)
}
