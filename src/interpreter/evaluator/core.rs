use std::io::Write;

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The first runtime error halts the
/// program.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes programs against an environment and an output sink.
///
/// The interpreter walks the AST directly. `print` writes to the injected
/// sink rather than straight to stdout, so callers (and tests) decide where
/// output lands.
///
/// ## Usage
///
/// An `Interpreter` is created once and fed a parsed program via
/// [`interpret`](Self::interpret). State in the global scope survives across
/// calls, so feeding several programs in sequence behaves like one longer
/// program.
pub struct Interpreter<'out> {
    environment:         Environment,
    legacy_nil_equality: bool,
    out:                 &'out mut dyn Write,
}

impl<'out> Interpreter<'out> {
    /// Creates an interpreter with an empty global scope, writing `print`
    /// output to `out`.
    #[must_use]
    pub fn new(out: &'out mut dyn Write) -> Self {
        Self { environment: Environment::new(),
               legacy_nil_equality: false,
               out }
    }

    /// Creates an interpreter using the historical equality rule, under
    /// which a lone `nil` left operand compares equal to anything.
    ///
    /// The default rule (`nil` equals only `nil`) is what [`new`](Self::new)
    /// gives you; this constructor exists for scripts that depend on the old
    /// behavior.
    #[must_use]
    pub fn with_legacy_nil_equality(out: &'out mut dyn Write) -> Self {
        Self { environment: Environment::new(),
               legacy_nil_equality: true,
               out }
    }

    /// Whether the historical `nil` equality rule is in effect.
    #[must_use]
    pub const fn legacy_nil_equality(&self) -> bool {
        self.legacy_nil_equality
    }

    /// Executes a program.
    ///
    /// Statements run in source order; the first runtime error stops
    /// execution and is returned. Output already printed stays printed.
    ///
    /// # Parameters
    /// - `statements`: The parsed program.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by any statement.
    pub fn interpret(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Errors
    /// Any `RuntimeError` raised while evaluating contained expressions, or
    /// `BrokenOutput` when the sink rejects a `print`.
    pub fn execute(&mut self, statement: &Stmt) -> EvalResult<()> {
        match statement {
            Stmt::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(())
            },
            Stmt::Print { expr, line } => {
                let value = self.eval(expr)?;
                writeln!(self.out, "{value}")
                    .map_err(|e| RuntimeError::BrokenOutput { details: e.to_string(),
                                                              line:    *line, })
            },
            Stmt::Var { name, initializer, .. } => {
                let value = match initializer {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                self.environment.define(name, value);
                Ok(())
            },
            Stmt::Block { statements, .. } => self.execute_block(statements),
        }
    }

    /// Executes the statements of a block inside a fresh child scope.
    ///
    /// The scope is popped on every exit path, including the error path, so
    /// a failing statement cannot leak its block's bindings.
    fn execute_block(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        self.environment.push_scope();

        for statement in statements {
            if let Err(error) = self.execute(statement) {
                self.environment.pop_scope();
                return Err(error);
            }
        }

        self.environment.pop_scope();
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, groups, variable
    /// reads, assignments, unary and binary operations.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Errors
    /// - `UndefinedVariable` when reading or assigning an undeclared name.
    /// - Operand type errors from the operator implementations.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::Variable { name, line } => {
                self.environment
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                     line: *line, })
            },
            Expr::Assign { name, value, line } => {
                let value = self.eval(value)?;

                if self.environment.assign(name, value.clone()) {
                    Ok(value)
                } else {
                    Err(RuntimeError::UndefinedVariable { name: name.clone(),
                                                          line: *line, })
                }
            },
            Expr::Unary { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::Binary { left,
                           op,
                           right,
                           line, } => self.eval_binary_op(left, *op, right, *line),
        }
    }
}
