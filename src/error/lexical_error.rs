#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
///
/// The scanner keeps going after reporting one of these, so a run can carry
/// several of them at once. `Display` renders the bare message; callers that
/// report to a user prefix it with the line themselves.
pub enum LexicalError {
    /// A string literal reached the end of input before its closing quote.
    UnterminatedString {
        /// The source line where the string started.
        line: usize,
    },
    /// A character no scanning rule recognizes.
    UnexpectedCharacter {
        /// The offending character, as it appeared in the source.
        character: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl LexicalError {
    /// Gets the source line the error occurred on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line } | Self::UnexpectedCharacter { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { .. } => write!(f, "Unterminated string."),
            Self::UnexpectedCharacter { character, .. } => {
                write!(f, "Unexpected character: {character}")
            },
        }
    }
}

impl std::error::Error for LexicalError {}
