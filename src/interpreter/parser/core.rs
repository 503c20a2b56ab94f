use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_equality},
};

/// Result type used by the parser.
///
/// All parsing functions return either a node of type `T` or the first
/// `ParseError` encountered; parsing never continues past an error.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_assignment(tokens)
}

/// Parses an assignment expression.
///
/// Assignment is right-associative, so `a = b = 1` parses as `a = (b = 1)`.
/// The left-hand side is parsed as an ordinary equality expression first; on
/// seeing `=` it must turn out to have been a bare variable reference,
/// anything else is an invalid assignment target.
///
/// Grammar: `assignment := IDENTIFIER "=" assignment | equality`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// An `Expr::Assign` node, or the plain equality expression when no `=`
/// follows.
///
/// # Errors
/// - `InvalidAssignmentTarget` when the left side of `=` is not a variable.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_equality(tokens)?;

    if let Some((Token::Equal, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let value = parse_assignment(tokens)?;

        return match expr {
            Expr::Variable { name, .. } => Ok(Expr::Assign { name,
                                                             value: Box::new(value),
                                                             line }),
            _ => Err(ParseError::InvalidAssignmentTarget { line }),
        };
    }

    Ok(expr)
}
