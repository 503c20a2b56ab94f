/// The environment module manages variable bindings and scopes.
///
/// Scopes form a stack: the bottom entry is the global scope, and each block
/// pushes a child scope on entry and pops it on exit. Lookups walk the stack
/// from the innermost scope outwards.
///
/// # Responsibilities
/// - Declares variables in the innermost scope.
/// - Resolves reads and assignments against the nearest enclosing binding.
/// - Reports undefined-variable errors with the source line.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and executes
/// statements, performs arithmetic, comparison and string operations, and
/// drives the environment. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions and executes statements.
/// - Applies the language's coercion, truthiness and equality rules.
/// - Reports runtime errors such as type mismatches or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Supports declarations, assignments, blocks, and the full expression
///   grammar.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum used during execution: numbers,
/// strings, booleans and nil. It also implements the language's truthiness
/// rule and the display format shared with the `print` statement.
pub mod value;
