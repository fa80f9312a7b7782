use crate::{
    ast::{BinaryOperator, ComparisonOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an arithmetic operation between two values.
    ///
    /// Both operands must be numeric. Two integers stay integral for `+`,
    /// `-` and `*`, with overflow reported rather than wrapped; a real on
    /// either side promotes the operation to reals. `/` is true division:
    /// both sides are converted to reals and the result is always real.
    /// A zero divisor is reported before anything else about the operands.
    ///
    /// Real results must be finite; an infinite result is an overflow.
    ///
    /// # Example
    /// ```
    /// use polite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, &Value::Integer(1), &Value::Integer(2), 1);
    /// assert_eq!(sum.unwrap(), Value::Integer(3));
    ///
    /// let quotient =
    ///     Context::eval_binary(BinaryOperator::Div, &Value::Integer(6), &Value::Integer(3), 1);
    /// assert_eq!(quotient.unwrap(), Value::Real(2.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::Integer;

        if !left.is_numeric() || !right.is_numeric() {
            return Err(RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                                     left.type_name(),
                                                                     right.type_name()),
                                                    line });
        }

        match (op, left, right) {
            (Div, _, _) => {
                let divisor = right.as_real(line)?;
                if divisor == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                finite(left.as_real(line)? / divisor, line)
            },
            (_, Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div => unreachable!(),
                };
                result.map(Integer)
                      .ok_or(RuntimeError::Overflow { line })
            },
            _ => {
                let a = left.as_real(line)?;
                let b = right.as_real(line)?;
                finite(match op {
                           Add => a + b,
                           Sub => a - b,
                           Mul => a * b,
                           Div => unreachable!(),
                       },
                       line)
            },
        }
    }

    /// Evaluates `is` / `isnt`.
    ///
    /// Never fails: values of unrelated types simply compare unequal.
    #[must_use]
    pub fn eval_comparison(op: ComparisonOperator, left: &Value, right: &Value) -> Value {
        let equal = left.loosely_equals(right);
        Value::Bool(match op {
                        ComparisonOperator::Is => equal,
                        ComparisonOperator::IsNot => !equal,
                    })
    }
}

/// Wraps a real result, rejecting infinities and NaN.
const fn finite(result: f64, line: usize) -> EvalResult<Value> {
    if result.is_finite() {
        Ok(Value::Real(result))
    } else {
        Err(RuntimeError::Overflow { line })
    }
}
