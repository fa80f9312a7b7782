use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use crate::{
    error::{RuntimeError, TimeoutReason},
    interpreter::evaluator::core::EvalResult,
};

/// Bounds a host places on a single run.
///
/// The language itself has no termination guarantee (`whilst` may loop
/// forever), so callers that execute untrusted programs should set at least
/// one of these. The default is unbounded.
///
/// # Example
/// ```
/// use std::time::Duration;
///
/// use polite::{interpreter::evaluator::limits::Limits, run_with_limits};
///
/// let limits = Limits::default().with_max_steps(1_000)
///                               .with_time_limit(Duration::from_secs(1));
/// let source = "hello please whilst 1 is 1 naturally please thankyou thankyou goodbye";
///
/// let error = run_with_limits(source, limits).unwrap_err();
/// assert_eq!(error.kind(), "Timeout");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Limits {
    /// Maximum number of evaluation steps. One step is charged per executed
    /// statement and per loop test.
    pub max_steps:  Option<u64>,
    /// Maximum wall clock time, measured from the start of evaluation.
    pub time_limit: Option<Duration>,
    /// Flag the host may raise from another thread to stop the run.
    pub cancel:     Option<Arc<AtomicBool>>,
}

impl Limits {
    /// Sets the step limit.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Sets the wall clock limit.
    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// Sets the cancellation flag.
    #[must_use]
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Tracks how much of its [`Limits`] a run has used.
#[derive(Debug)]
pub struct Budget {
    limits:   Limits,
    steps:    u64,
    deadline: Option<Instant>,
}

impl Budget {
    /// Starts the clock for `limits`.
    #[must_use]
    pub fn new(limits: Limits) -> Self {
        let deadline = limits.time_limit
                             .and_then(|limit| Instant::now().checked_add(limit));
        Self { limits,
               steps: 0,
               deadline }
    }

    /// Charges one step and checks every limit.
    ///
    /// # Errors
    /// Returns `RuntimeError::Timeout` once any limit is exceeded.
    pub fn charge(&mut self, line: usize) -> EvalResult<()> {
        self.steps = self.steps.saturating_add(1);

        if let Some(max_steps) = self.limits.max_steps
           && self.steps > max_steps
        {
            return Err(RuntimeError::Timeout { reason: TimeoutReason::StepLimit(max_steps),
                                               line });
        }

        if let (Some(deadline), Some(limit)) = (self.deadline, self.limits.time_limit)
           && Instant::now() >= deadline
        {
            return Err(RuntimeError::Timeout { reason: TimeoutReason::TimeLimit(limit),
                                               line });
        }

        if let Some(cancel) = &self.limits.cancel
           && cancel.load(Ordering::Relaxed)
        {
            return Err(RuntimeError::Timeout { reason: TimeoutReason::Cancelled,
                                               line });
        }

        Ok(())
    }
}
