use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed, or a real result was not finite.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The host-imposed execution limit was exceeded.
    Timeout {
        /// Which limit was hit.
        reason: TimeoutReason,
        /// The source line being executed when the limit was hit.
        line:   usize,
    },
}

/// The limit that ended a run with [`RuntimeError::Timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutReason {
    /// More evaluation steps than allowed were taken.
    StepLimit(u64),
    /// The wall clock time limit elapsed.
    TimeLimit(Duration),
    /// The host raised the cancellation flag.
    Cancelled,
}

impl RuntimeError {
    /// Returns the name of the error variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UndefinedVariable { .. } => "UndefinedVariable",
            Self::TypeMismatch { .. } => "TypeMismatch",
            Self::DivisionByZero { .. } => "DivisionByZero",
            Self::Overflow { .. } => "Overflow",
            Self::Timeout { .. } => "Timeout",
        }
    }

    /// Returns the source line the error occurred on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::Timeout { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for TimeoutReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StepLimit(steps) => write!(f, "step limit of {steps} exceeded"),
            Self::TimeLimit(limit) => write!(f, "time limit of {limit:?} exceeded"),
            Self::Cancelled => write!(f, "cancelled by host"),
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Nobody was ever called '{name}'.")
            },
            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type mismatch: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Numeric overflow while trying to compute result."),
            Self::Timeout { reason, line } => {
                write!(f, "Error on line {line}: Execution stopped, {reason}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
