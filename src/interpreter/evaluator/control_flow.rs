use crate::{
    ast::{Expr, Statement},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a `perchance` conditional.
    ///
    /// The test must produce a boolean. When it is `true` the body runs once
    /// in order; when it is `false` the body is skipped entirely.
    ///
    /// # Errors
    /// `TypeMismatch` for a non-boolean test, or any error raised by the
    /// test or the body.
    pub fn eval_conditional(&mut self, test: &Expr, body: &[Statement]) -> EvalResult<()> {
        if self.eval(test)?.as_bool(test.line_number())? {
            self.eval_block(body)?;
        }

        Ok(())
    }

    /// Evaluates a `whilst` loop.
    ///
    /// The test is re-evaluated before every iteration and the loop ends the
    /// first time it is `false`. There is no built-in iteration cap; each
    /// test costs a step so that host limits can end a runaway loop.
    ///
    /// # Errors
    /// `TypeMismatch` for a non-boolean test, `Timeout` when a limit is hit,
    /// or any error raised by the test or the body.
    pub fn eval_while(&mut self, test: &Expr, body: &[Statement], line: usize) -> EvalResult<()> {
        loop {
            self.budget.charge(line)?;

            if !self.eval(test)?.as_bool(test.line_number())? {
                return Ok(());
            }

            self.eval_block(body)?;
        }
    }
}
