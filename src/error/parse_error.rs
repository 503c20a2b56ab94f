#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// Parsing is fail-fast; the first of these aborts the parse and is the only
/// one reported. `Display` renders the bare message without the line prefix.
pub enum ParseError {
    /// Found a token no grammar rule can start from.
    UnexpectedToken {
        /// The token encountered, rendered as it appeared in the source.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A grouping `()` with nothing inside it.
    EmptyGroup {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of an `=` was not something assignable.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement was missing its terminating `;`.
    ExpectedSemicolon {
        /// The construct the semicolon should have followed.
        after: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A `var` keyword not followed by an identifier.
    ExpectedVariableName {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A block was opened with `{` but never closed.
    ExpectedRightBrace {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Gets the source line the error occurred on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedClosingParen { line }
            | Self::EmptyGroup { line }
            | Self::InvalidAssignmentTarget { line }
            | Self::ExpectedSemicolon { line, .. }
            | Self::ExpectedVariableName { line }
            | Self::ExpectedRightBrace { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, .. } => {
                write!(f, "Unexpected token: {token}.")
            },
            Self::UnexpectedEndOfInput { .. } => {
                write!(f, "Unexpected end of input.")
            },
            Self::ExpectedClosingParen { .. } => {
                write!(f, "Expect ')' after expression.")
            },
            Self::EmptyGroup { .. } => write!(f, "Empty group"),
            Self::InvalidAssignmentTarget { .. } => {
                write!(f, "Invalid assignment target.")
            },
            Self::ExpectedSemicolon { after, .. } => {
                write!(f, "Expect ';' after {after}.")
            },
            Self::ExpectedVariableName { .. } => {
                write!(f, "Expect variable name.")
            },
            Self::ExpectedRightBrace { .. } => {
                write!(f, "Expect '}}' after block.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
