#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a program.
///
/// The first of these halts execution. `Display` renders the bare message;
/// the line prefix belongs to the caller.
pub enum RuntimeError {
    /// A variable was read or assigned before being declared.
    UndefinedVariable {
        /// Name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator was applied to a non-number.
    OperandMustBeNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic or comparison operator was applied to non-numbers.
    OperandsMustBeNumbers {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `+` was applied to operands of mixed or unsupported types.
    OperandsMustBeNumbersOrStrings {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output sink failed during a `print` statement.
    BrokenOutput {
        /// Details about the underlying I/O failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Gets the source line the error occurred on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::OperandMustBeNumber { line }
            | Self::OperandsMustBeNumbers { line }
            | Self::OperandsMustBeNumbersOrStrings { line }
            | Self::BrokenOutput { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, .. } => {
                write!(f, "Undefined variable '{name}'.")
            },
            Self::OperandMustBeNumber { .. } => {
                write!(f, "Operand must be a number.")
            },
            Self::OperandsMustBeNumbers { .. } => {
                write!(f, "Operands must be numbers.")
            },
            Self::OperandsMustBeNumbersOrStrings { .. } => {
                write!(f, "Operands must be two numbers or two strings.")
            },
            Self::BrokenOutput { details, .. } => {
                write!(f, "Could not write output: {details}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
