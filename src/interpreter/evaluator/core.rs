use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            environment::Environment,
            limits::{Budget, Limits},
        },
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context of one run.
///
/// Holds the variable environment, the values emitted by `say` so far, and
/// the budget tracking the host's limits. A context is consumed by
/// [`Context::run`], so nothing carries over from one program to the next.
pub struct Context {
    pub(super) environment: Environment,
    pub(super) outputs:     Vec<Value>,
    pub(super) budget:      Budget,
}

impl Context {
    /// Creates a context with an empty environment and no limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Creates a context with an empty environment, enforcing `limits`.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self { environment: Environment::new(),
               outputs:     Vec::new(),
               budget:      Budget::new(limits), }
    }

    /// Executes every top-level statement in order and returns the values
    /// emitted by `say`.
    ///
    /// # Errors
    /// The first runtime error aborts the program; outputs gathered up to
    /// that point are dropped with the context.
    ///
    /// # Example
    /// ```
    /// use polite::{
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         lexer::tokenize,
    ///         parser::core::parse,
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let tokens = tokenize("hello please say 6/3 thankyou goodbye").unwrap();
    /// let program = parse(&tokens).unwrap();
    ///
    /// assert_eq!(Context::new().run(&program).unwrap(), vec![Value::Real(2.0)]);
    /// ```
    pub fn run(mut self, program: &Program) -> EvalResult<Vec<Value>> {
        self.eval_block(&program.statements)?;
        Ok(self.outputs)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands are always evaluated left before right.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::NumberLiteral { value, .. } => Ok(Value::Integer(*value)),
            Expr::StringLiteral { value, .. } => Ok(Value::Text(value.clone())),
            Expr::VariableRef { name, line } => {
                self.environment
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                     line: *line, })
            },
            Expr::UnaryOp { op, operand, line } => {
                let value = self.eval(operand)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { op,
                             left,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Comparison { op, left, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_comparison(*op, &left, &right))
            },
        }
    }

    /// Executes a single statement.
    ///
    /// Every statement costs one step of the budget before it runs. Only
    /// `say` adds to the output; everything else runs for its effect.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        self.budget.charge(statement.line_number())?;

        match statement {
            Statement::Assign { name, value, .. } => {
                let value = self.eval(value)?;
                self.environment.assign(name, value);
            },
            Statement::Say { value, .. } => {
                let value = self.eval(value)?;
                self.outputs.push(value);
            },
            Statement::Conditional { test, body, .. } => self.eval_conditional(test, body)?,
            Statement::WhileLoop { test, body, line } => self.eval_while(test, body, *line)?,
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
            },
            Statement::NoOp { .. } => {},
        }

        Ok(())
    }

    /// Executes statements in order, stopping at the first error.
    pub fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        statements.iter()
                  .try_for_each(|statement| self.eval_statement(statement))
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
