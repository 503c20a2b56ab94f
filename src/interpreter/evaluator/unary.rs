use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a unary operation.
    ///
    /// Negation only applies to numbers. Logical NOT applies to any value
    /// through the truthiness rule, so `!0` is `false` and `!nil` is `true`.
    ///
    /// # Parameters
    /// - `op`: The unary operator to apply.
    /// - `expr`: The operand expression.
    /// - `line`: Line number of the operator, used in error reports.
    ///
    /// # Errors
    /// `OperandMustBeNumber` when negating a non-number.
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                expr: &Expr,
                                line: usize)
                                -> EvalResult<Value> {
        let value = self.eval(expr)?;

        match op {
            UnaryOperator::Negate => {
                let n = value.as_number()
                             .ok_or(RuntimeError::OperandMustBeNumber { line })?;
                Ok(Value::Number(-n))
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}
