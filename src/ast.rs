use std::fmt;

use crate::util::fmt::format_number;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code. The value is fixed at parse time and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal. All numbers in the language are
    /// doubles.
    Number(f64),
    /// A string literal, stored without its surrounding quotes.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// The `nil` literal.
    Nil,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each variant models a distinct syntactic construct and carries the source
/// line it came from for error reporting. The tree is built once by the
/// parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or nil).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line: usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name. Evaluating it reads the binding.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment to an existing variable. Evaluating it both performs the
    /// assignment and yields the assigned value.
    Assign {
        /// Name of the variable.
        name: String,
        /// The value being assigned.
        value: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation or logical not).
    Unary {
        /// The unary operator to apply.
        op: UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison or equality).
    Binary {
        /// Left operand.
        left: Box<Self>,
        /// The operator.
        op: BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use minilox::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(), line: 5 };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Grouping { line, .. }
            | Self::Variable { line, .. }
            | Self::Assign { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. } => *line,
        }
    }
}

/// A statement node.
///
/// Statements are the units the interpreter executes; they produce side
/// effects rather than values.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A standalone expression evaluated for its side effects; the value is
    /// discarded.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A `print` statement; the value is formatted and written to the output
    /// sink followed by a newline.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A variable declaration using `var`. A missing initializer binds the
    /// name to `nil`.
    Var {
        /// The name of the variable.
        name: String,
        /// The initial value of the variable, when present.
        initializer: Option<Expr>,
        /// Line number in the source code.
        line: usize,
    },
    /// A braced block. Executing it introduces a child scope for exactly the
    /// duration of the block.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}

impl fmt::Display for Expr {
    /// Renders the expression as an S-expression, the format printed by the
    /// CLI's parse mode.
    ///
    /// # Example
    /// ```
    /// use minilox::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::Binary { left:  Box::new(Expr::Literal { value: 1.0.into(), line: 1 }),
    ///                           op:    BinaryOperator::Add,
    ///                           right: Box::new(Expr::Literal { value: 2.0.into(), line: 1 }),
    ///                           line:  1, };
    ///
    /// assert_eq!(expr.to_string(), "(+ 1.0 2.0)");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Grouping { expr, .. } => write!(f, "(group {expr})"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Assign { name, value, .. } => write!(f, "(= {name} {value})"),
            Self::Unary { op, expr, .. } => write!(f, "({op} {expr})"),
            Self::Binary { left, op, right, .. } => write!(f, "({op} {left} {right})"),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression { expr, .. } => write!(f, "{expr}"),
            Self::Print { expr, .. } => write!(f, "(print {expr})"),
            Self::Var { name, initializer: Some(init), .. } => write!(f, "(var {name} {init})"),
            Self::Var { name, initializer: None, .. } => write!(f, "(var {name})"),
            Self::Block { statements, .. } => {
                write!(f, "(block")?;
                for statement in statements {
                    write!(f, " {statement}")?;
                }
                write!(f, ")")
            },
        }
    }
}
