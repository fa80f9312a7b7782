use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a prefix `+` or `-`.
    ///
    /// The operand must be numeric. Negating `i64::MIN` reports an overflow.
    ///
    /// # Example
    /// ```
    /// use polite::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Minus, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Plus, &Value::Bool(true), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, Value::Integer(_) | Value::Real(_)) => Ok(value.clone()),
            (UnaryOperator::Minus, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            (UnaryOperator::Minus, Value::Real(r)) => Ok(Value::Real(-r)),
            _ => Err(RuntimeError::TypeMismatch { details: format!("cannot apply unary '{op}' to {}",
                                                                   value.type_name()),
                                                  line }),
        }
    }
}
