use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Handles the prefix operators `!` and `-`, which nest: `!!x` and `--x` are
/// both valid and apply the operator twice.
///
/// The rule is: `unary := ("!" | "-") unary | primary`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Unary` node, or a primary expression when no prefix operator is
/// present.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((token, line)) = tokens.peek() {
        let op = match token {
            Token::Bang => Some(UnaryOperator::Not),
            Token::Minus => Some(UnaryOperator::Negate),
            _ => None,
        };

        if let Some(op) = op {
            let line = *line;
            tokens.next();
            let expr = parse_unary(tokens)?;
            return Ok(Expr::Unary { op,
                                    expr: Box::new(expr),
                                    line });
        }
    }

    parse_primary(tokens)
}

/// Parses a primary expression.
///
/// This is the highest-precedence level of the grammar: literals, variable
/// references and parenthesized groups.
///
/// The rule is:
/// `primary := NUMBER | STRING | "true" | "false" | "nil" | IDENTIFIER |
/// "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedEndOfInput` when the stream ends where an expression was
///   required.
/// - `UnexpectedToken` when the next token cannot start an expression.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number((n, _)), line)) => Ok(Expr::Literal { value: LiteralValue::Number(*n),
                                                                  line:  *line, }),
        Some((Token::Str(s), line)) => Ok(Expr::Literal { value: LiteralValue::Str(s.clone()),
                                                          line:  *line, }),
        Some((Token::True, line)) => Ok(Expr::Literal { value: LiteralValue::Bool(true),
                                                        line:  *line, }),
        Some((Token::False, line)) => Ok(Expr::Literal { value: LiteralValue::Bool(false),
                                                         line:  *line, }),
        Some((Token::Nil, line)) => Ok(Expr::Literal { value: LiteralValue::Nil,
                                                       line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        Some((Token::LParen, line)) => parse_grouping(tokens, *line),
        Some((Token::Eof, line)) => Err(ParseError::UnexpectedEndOfInput { line: *line }),
        Some((token, line)) => Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                                 line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a parenthesized group.
///
/// The opening `(` has already been consumed. An immediately following `)` is
/// rejected; a group must wrap an expression.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `(` token.
/// - `line`: Line number of the `(` token.
///
/// # Returns
/// An `Expr::Grouping` node wrapping the inner expression.
///
/// # Errors
/// - `EmptyGroup` for `()`.
/// - `ExpectedClosingParen` when the matching `)` is missing.
/// - Propagates any errors from the inner expression.
pub fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::RParen, _)) = tokens.peek() {
        return Err(ParseError::EmptyGroup { line });
    }

    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(Expr::Grouping { expr: Box::new(expr),
                                                        line }),
        Some((_, line)) => Err(ParseError::ExpectedClosingParen { line: *line }),
        None => Err(ParseError::ExpectedClosingParen { line }),
    }
}
