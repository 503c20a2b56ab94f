use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses equality expressions.
///
/// Handles left-associative chains of `==` and `!=`.
///
/// The rule is: `equality := comparison (("==" | "!=") comparison)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_comparison(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
        {
            let line = *line;
            tokens.next();
            let right = parse_comparison(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses comparison expressions.
///
/// Handles left-associative chains of `<`, `>`, `<=` and `>=`.
///
/// The rule is: `comparison := term (("<" | ">" | "<=" | ">=") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree combining term-level nodes.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_term(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Less
                       | BinaryOperator::Greater
                       | BinaryOperator::LessEqual
                       | BinaryOperator::GreaterEqual)
        {
            let line = *line;
            tokens.next();
            let right = parse_term(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `term := factor (("+" | "-") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let right = parse_factor(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative binary operators: `*` and `/`.
///
/// The rule is: `factor := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree combining unary-level nodes.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = *line;
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, comparison operators, equality operators).
/// Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use minilox::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Semicolon), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
