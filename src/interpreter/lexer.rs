use std::fmt;

use logos::Logos;

use crate::{error::LexicalError, util::fmt::format_number};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// A `.` is only part of the literal when a digit follows it, so `123.`
    /// scans as a number followed by a dot. The raw lexeme rides along with
    /// the parsed value so tokenize mode can echo the source spelling.
    #[regex(r"[0-9]+(\.[0-9]+)?", lex_number)]
    Number((f64, String)),
    /// String literal tokens. The payload is the text strictly between the
    /// quotes; escape sequences are not interpreted.
    ///
    /// The second rule catches an opening quote that is never closed before
    /// end of input; its callback always errors, so an unterminated string
    /// surfaces as a lexical error and never as a token.
    #[regex(r#""[^"]*""#, lex_string)]
    #[regex(r#""[^"]*"#, lex_unterminated_string)]
    Str(String),
    /// Identifier tokens; variable names such as `x` or `counter`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `for`
    #[token("for")]
    For,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `// Comments.`
    ///
    /// Everything up to (not including) the next newline is discarded.
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// Newlines advance the line counter and produce no token.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End-of-input sentinel. Appended exactly once by [`scan`]; the parser
    /// tests against it instead of against iterator exhaustion.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Error detail produced by the generated lexer.
///
/// This type only lives inside the lexing loop; [`scan`] converts it into the
/// public [`LexicalError`] together with the offending slice and line.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexError {
    /// A byte no lexing rule recognizes.
    #[default]
    UnexpectedCharacter,
    /// An opening quote with no matching closing quote.
    UnterminatedString {
        /// The line the string started on.
        line: usize,
    },
}

/// Scans a full source text into tokens.
///
/// This is a single left-to-right pass. Lexical errors do not abort the scan;
/// they accumulate while scanning continues, so one bad character does not
/// hide later diagnostics. The returned token sequence always ends with
/// exactly one [`Token::Eof`] carrying the final line number.
///
/// # Parameters
/// - `source`: Raw source text.
///
/// # Returns
/// The `(Token, line)` pairs in source order and every lexical error found.
///
/// # Example
/// ```
/// use minilox::interpreter::lexer::{scan, Token};
///
/// let (tokens, errors) = scan("1 + 2");
///
/// assert!(errors.is_empty());
/// assert_eq!(tokens.len(), 4); // 1, +, 2, EOF
/// assert_eq!(tokens.last(), Some(&(Token::Eof, 1)));
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<(Token, usize)>, Vec<LexicalError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(item) = lexer.next() {
        match item {
            Ok(token) => {
                // A multi-line string is tagged with the line it started on.
                let line = match &token {
                    Token::Str(text) => lexer.extras.line - text.matches('\n').count(),
                    _ => lexer.extras.line,
                };
                tokens.push((token, line));
            },
            Err(LexError::UnterminatedString { line }) => {
                errors.push(LexicalError::UnterminatedString { line });
            },
            Err(LexError::UnexpectedCharacter) => {
                errors.push(LexicalError::UnexpectedCharacter {
                    character: lexer.slice().to_string(),
                    line: lexer.extras.line,
                });
            },
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));

    (tokens, errors)
}

/// Parses a numeric literal from the current token slice, keeping the raw
/// lexeme next to the parsed value.
///
/// The scanning rule guarantees the slice is a valid float; a `None` here
/// turns into a lexer error instead of a silently dropped token.
fn lex_number(lex: &mut logos::Lexer<Token>) -> Option<(f64, String)> {
    let slice = lex.slice();
    slice.parse().ok().map(|value| (value, slice.to_string()))
}

/// Extracts the literal text of a terminated string.
///
/// Newlines inside the string are counted here because the newline rule never
/// sees them.
fn lex_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();
    slice[1..slice.len() - 1].to_string()
}

/// Rejects a string literal that reaches end of input before its closing
/// quote. The error is tagged with the line the string started on.
fn lex_unterminated_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexError> {
    let line = lex.extras.line;
    lex.extras.line += lex.slice().matches('\n').count();
    Err(LexError::UnterminatedString { line })
}

impl Token {
    /// Reconstructs the raw source text this token was scanned from.
    ///
    /// Rebuilding a program from its lexemes and rescanning it yields the
    /// same token sequence. `Eof` has no source text and yields the empty
    /// string, as do the skipped kinds, which never appear in scan output.
    #[must_use]
    pub fn lexeme(&self) -> String {
        match self {
            Self::Number((_, lexeme)) => lexeme.clone(),
            Self::Str(s) => format!("\"{s}\""),
            Self::Identifier(name) => name.clone(),
            Self::And => "and".to_string(),
            Self::Class => "class".to_string(),
            Self::Else => "else".to_string(),
            Self::False => "false".to_string(),
            Self::For => "for".to_string(),
            Self::Fun => "fun".to_string(),
            Self::If => "if".to_string(),
            Self::Nil => "nil".to_string(),
            Self::Or => "or".to_string(),
            Self::Print => "print".to_string(),
            Self::Return => "return".to_string(),
            Self::Super => "super".to_string(),
            Self::This => "this".to_string(),
            Self::True => "true".to_string(),
            Self::Var => "var".to_string(),
            Self::While => "while".to_string(),
            Self::LParen => "(".to_string(),
            Self::RParen => ")".to_string(),
            Self::LBrace => "{".to_string(),
            Self::RBrace => "}".to_string(),
            Self::Comma => ",".to_string(),
            Self::Dot => ".".to_string(),
            Self::Minus => "-".to_string(),
            Self::Plus => "+".to_string(),
            Self::Semicolon => ";".to_string(),
            Self::Slash => "/".to_string(),
            Self::Star => "*".to_string(),
            Self::Bang => "!".to_string(),
            Self::BangEqual => "!=".to_string(),
            Self::Equal => "=".to_string(),
            Self::EqualEqual => "==".to_string(),
            Self::Greater => ">".to_string(),
            Self::GreaterEqual => ">=".to_string(),
            Self::Less => "<".to_string(),
            Self::LessEqual => "<=".to_string(),
            Self::Comment | Self::NewLine | Self::Ignored | Self::Eof => String::new(),
        }
    }
}

impl fmt::Display for Token {
    /// Renders a token in the `KIND lexeme literal` shape used by the
    /// tokenize mode of the CLI. Tokens without a literal print `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number((value, lexeme)) => {
                write!(f, "NUMBER {lexeme} {}", format_number(*value))
            },
            Self::Str(s) => write!(f, "STRING \"{s}\" {s}"),
            Self::Identifier(name) => write!(f, "IDENTIFIER {name} null"),
            Self::And => write!(f, "AND and null"),
            Self::Class => write!(f, "CLASS class null"),
            Self::Else => write!(f, "ELSE else null"),
            Self::False => write!(f, "FALSE false null"),
            Self::For => write!(f, "FOR for null"),
            Self::Fun => write!(f, "FUN fun null"),
            Self::If => write!(f, "IF if null"),
            Self::Nil => write!(f, "NIL nil null"),
            Self::Or => write!(f, "OR or null"),
            Self::Print => write!(f, "PRINT print null"),
            Self::Return => write!(f, "RETURN return null"),
            Self::Super => write!(f, "SUPER super null"),
            Self::This => write!(f, "THIS this null"),
            Self::True => write!(f, "TRUE true null"),
            Self::Var => write!(f, "VAR var null"),
            Self::While => write!(f, "WHILE while null"),
            Self::LParen => write!(f, "LEFT_PAREN ( null"),
            Self::RParen => write!(f, "RIGHT_PAREN ) null"),
            Self::LBrace => write!(f, "LEFT_BRACE {{ null"),
            Self::RBrace => write!(f, "RIGHT_BRACE }} null"),
            Self::Comma => write!(f, "COMMA , null"),
            Self::Dot => write!(f, "DOT . null"),
            Self::Minus => write!(f, "MINUS - null"),
            Self::Plus => write!(f, "PLUS + null"),
            Self::Semicolon => write!(f, "SEMICOLON ; null"),
            Self::Slash => write!(f, "SLASH / null"),
            Self::Star => write!(f, "STAR * null"),
            Self::Bang => write!(f, "BANG ! null"),
            Self::BangEqual => write!(f, "BANG_EQUAL != null"),
            Self::Equal => write!(f, "EQUAL = null"),
            Self::EqualEqual => write!(f, "EQUAL_EQUAL == null"),
            Self::Greater => write!(f, "GREATER > null"),
            Self::GreaterEqual => write!(f, "GREATER_EQUAL >= null"),
            Self::Less => write!(f, "LESS < null"),
            Self::LessEqual => write!(f, "LESS_EQUAL <= null"),
            Self::Comment | Self::NewLine | Self::Ignored => Ok(()),
            Self::Eof => write!(f, "EOF  null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::scan;

    #[test]
    fn number_tokens_echo_their_source_spelling() {
        let (tokens, errors) = scan("3.1400 3 3.0");

        assert!(errors.is_empty());
        assert_eq!(tokens[0].0.to_string(), "NUMBER 3.1400 3.14");
        assert_eq!(tokens[1].0.to_string(), "NUMBER 3 3.0");
        assert_eq!(tokens[2].0.to_string(), "NUMBER 3.0 3.0");
    }

    #[test]
    fn tokens_render_kind_lexeme_literal() {
        let (tokens, errors) = scan("var x = \"hi\"; () <= ==");

        assert!(errors.is_empty());

        let lines: Vec<String> = tokens.iter().map(|(t, _)| t.to_string()).collect();
        assert_eq!(lines,
                   ["VAR var null",
                    "IDENTIFIER x null",
                    "EQUAL = null",
                    "STRING \"hi\" hi",
                    "SEMICOLON ; null",
                    "LEFT_PAREN ( null",
                    "RIGHT_PAREN ) null",
                    "LESS_EQUAL <= null",
                    "EQUAL_EQUAL == null",
                    "EOF  null"]);
    }

    #[test]
    fn lexemes_reconstruct_the_source_spelling() {
        let (tokens, errors) = scan("var x = 5.50; print \"ok\" != x;");

        assert!(errors.is_empty());

        let lexemes: Vec<String> = tokens.iter().map(|(t, _)| t.lexeme()).collect();
        assert_eq!(lexemes,
                   ["var", "x", "=", "5.50", ";", "print", "\"ok\"", "!=", "x", ";", ""]);
    }
}
