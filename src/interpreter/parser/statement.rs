use std::iter::Peekable;

use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a whole program.
///
/// A program is a sequence of declarations running up to the end-of-input
/// token. Parsing is fail-fast: the first error aborts and nothing after it
/// is inspected.
///
/// Grammar: `program := declaration* EOF`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The statements in source order.
///
/// # Example
/// ```
/// use minilox::interpreter::{lexer::scan, parser::statement::parse_program};
///
/// let (tokens, errors) = scan("var x = 1; print x;");
/// assert!(errors.is_empty());
///
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut statements = Vec::new();

    while let Some((token, _)) = tokens.peek() {
        if matches!(token, Token::Eof) {
            break;
        }
        statements.push(parse_declaration(tokens)?);
    }

    Ok(statements)
}

/// Parses a declaration.
///
/// Grammar: `declaration := var_declaration | statement`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed statement node.
///
/// # Errors
/// - `ExpectedVariableName` when `var` is not followed by an identifier.
/// - `ExpectedSemicolon` when the declaration is not terminated.
/// - Propagates any errors from the initializer expression.
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Var, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let name = match tokens.next() {
            Some((Token::Identifier(name), _)) => name.clone(),
            Some((_, line)) => return Err(ParseError::ExpectedVariableName { line: *line }),
            None => return Err(ParseError::ExpectedVariableName { line }),
        };

        let initializer = if let Some((Token::Equal, _)) = tokens.peek() {
            tokens.next();
            Some(parse_expression(tokens)?)
        } else {
            None
        };

        expect_semicolon(tokens, "variable declaration", line)?;

        return Ok(Stmt::Var { name,
                              initializer,
                              line });
    }

    parse_statement(tokens)
}

/// Parses a single statement.
///
/// Grammar: `statement := print_statement | block | expression_statement`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed statement node.
///
/// # Errors
/// - `ExpectedSemicolon` when a print or expression statement is not
///   terminated.
/// - `ExpectedRightBrace` when a block is opened but never closed.
/// - Propagates any errors from the contained expressions.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Print, line)) => {
            let line = *line;
            tokens.next();

            let expr = parse_expression(tokens)?;
            expect_semicolon(tokens, "value", line)?;

            Ok(Stmt::Print { expr, line })
        },

        Some((Token::LBrace, line)) => {
            let line = *line;
            tokens.next();

            parse_block(tokens, line)
        },

        _ => {
            let expr = parse_expression(tokens)?;
            let line = expr.line_number();
            expect_semicolon(tokens, "expression", line)?;

            Ok(Stmt::Expression { expr, line })
        },
    }
}

/// Parses the body of a block.
///
/// The opening `{` has already been consumed. Declarations are collected
/// until the matching `}`; hitting end of input first is an error.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `{` token.
/// - `line`: Line number of the `{` token.
///
/// # Returns
/// A `Stmt::Block` node holding the contained statements.
fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                return Ok(Stmt::Block { statements, line });
            },
            Some((Token::Eof, line)) => {
                return Err(ParseError::ExpectedRightBrace { line: *line });
            },
            None => return Err(ParseError::ExpectedRightBrace { line }),
            Some(_) => statements.push(parse_declaration(tokens)?),
        }
    }
}

/// Consumes the `;` that terminates a statement.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the expected semicolon.
/// - `after`: The construct named in the error message.
/// - `line`: Fallback line when the stream is exhausted.
fn expect_semicolon<'a, I>(tokens: &mut Peekable<I>,
                           after: &'static str,
                           line: usize)
                           -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Semicolon, _)) => {
            tokens.next();
            Ok(())
        },
        Some((_, line)) => Err(ParseError::ExpectedSemicolon { after, line: *line }),
        None => Err(ParseError::ExpectedSemicolon { after, line }),
    }
}
