use std::fmt;

use crate::{ast::LiteralValue, util::fmt::format_number};

/// A value produced by evaluating an expression.
///
/// The language is dynamically typed; every expression yields one of these
/// four variants and type checks happen at operator-application time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit floating-point number.
    Number(f64),
    /// A string.
    Str(String),
    /// A boolean.
    Bool(bool),
    /// The absence of a value.
    Nil,
}

impl Value {
    /// Applies the language's truthiness rule.
    ///
    /// `nil` and `false` are falsey; every other value is truthy, including
    /// `0` and the empty string.
    ///
    /// # Example
    /// ```
    /// use minilox::interpreter::value::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::Str(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Number(_) | Self::Str(_) => true,
        }
    }

    /// Returns the numeric payload, or `None` for non-numbers.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Nil => Self::Nil,
        }
    }
}

impl fmt::Display for Value {
    /// Renders a value the way `print` shows it: numbers through
    /// [`format_number`], strings without quotes, `nil` as the bare word.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn numbers_print_with_decimal_rule() {
        assert_eq!(Value::Number(3.0).to_string(), "3.0");
        assert_eq!(Value::Number(3.14).to_string(), "3.14");
    }

    #[test]
    fn strings_print_without_quotes() {
        assert_eq!(Value::Str("hi".to_string()).to_string(), "hi");
    }

    #[test]
    fn nil_and_bools_print_as_keywords() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }
}
