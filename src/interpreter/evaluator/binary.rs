use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a binary operation.
    ///
    /// The right operand is evaluated before the left one. That order is a
    /// compatibility contract: assignments nested in the left operand see
    /// the effects of the right operand.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The operator.
    /// - `right`: Right operand expression.
    /// - `line`: Line number of the operator, used in error reports.
    ///
    /// # Errors
    /// - `OperandsMustBeNumbers` for arithmetic or comparison on non-numbers.
    /// - `OperandsMustBeNumbersOrStrings` for `+` on mixed operand types.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize)
                                 -> EvalResult<Value> {
        let right = self.eval(right)?;
        let left = self.eval(left)?;

        match op {
            BinaryOperator::Add => match (&left, &right) {
                (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
                (Value::Str(l), Value::Str(r)) => Ok(Value::Str(format!("{l}{r}"))),
                _ => Err(RuntimeError::OperandsMustBeNumbersOrStrings { line }),
            },
            BinaryOperator::Sub => {
                let (l, r) = numeric_operands(&left, &right, line)?;
                Ok(Value::Number(l - r))
            },
            BinaryOperator::Mul => {
                let (l, r) = numeric_operands(&left, &right, line)?;
                Ok(Value::Number(l * r))
            },
            // Division by zero is not an error; it follows IEEE 754 and
            // yields an infinity or NaN.
            BinaryOperator::Div => {
                let (l, r) = numeric_operands(&left, &right, line)?;
                Ok(Value::Number(l / r))
            },
            BinaryOperator::Less => {
                let (l, r) = numeric_operands(&left, &right, line)?;
                Ok(Value::Bool(l < r))
            },
            BinaryOperator::Greater => {
                let (l, r) = numeric_operands(&left, &right, line)?;
                Ok(Value::Bool(l > r))
            },
            BinaryOperator::LessEqual => {
                let (l, r) = numeric_operands(&left, &right, line)?;
                Ok(Value::Bool(l <= r))
            },
            BinaryOperator::GreaterEqual => {
                let (l, r) = numeric_operands(&left, &right, line)?;
                Ok(Value::Bool(l >= r))
            },
            BinaryOperator::Equal => Ok(Value::Bool(self.values_equal(&left, &right))),
            BinaryOperator::NotEqual => Ok(Value::Bool(!self.values_equal(&left, &right))),
        }
    }

    /// Compares two values for equality.
    ///
    /// Values of different types are never equal and never raise an error.
    /// Under the historical rule a lone `nil` left operand is considered
    /// equal to anything; the corrected default only equates `nil` with
    /// `nil`.
    pub(crate) fn values_equal(&self, left: &Value, right: &Value) -> bool {
        match (left, right) {
            (Value::Nil, Value::Nil) => true,
            (Value::Nil, _) => self.legacy_nil_equality(),
            (_, Value::Nil) => false,
            _ => left == right,
        }
    }
}

/// Extracts the numeric payloads of both operands.
///
/// # Errors
/// `OperandsMustBeNumbers` when either operand is not a number.
fn numeric_operands(left: &Value, right: &Value, line: usize) -> EvalResult<(f64, f64)> {
    match (left.as_number(), right.as_number()) {
        (Some(l), Some(r)) => Ok((l, r)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
    }
}
