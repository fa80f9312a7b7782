use serde::Serialize;

/// Lexing errors.
///
/// Raised while the source text is being split into tokens. Lexing errors
/// always abort a run before parsing starts.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the errors raised when the token stream does not follow the
/// grammar, such as a statement missing its `please` or `thankyou`.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, type mismatches, undefined variables, or a host-imposed
/// execution limit being exceeded.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::{RuntimeError, TimeoutReason};

/// The pipeline phase an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    /// Tokenizing the source text.
    Lex,
    /// Building the syntax tree.
    Parse,
    /// Evaluating the syntax tree.
    Runtime,
}

/// Any error that can abort a run.
///
/// Wraps the error of the phase that failed. Every error is fatal: the
/// first one raised ends the run and no output is reported alongside it.
#[derive(Debug)]
pub enum Error {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// The token stream did not match the grammar.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

/// A structured, serializable description of an [`Error`].
///
/// This is the shape host adapters surface to users: the phase, the name of
/// the error kind and a human readable detail message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    /// The phase that failed.
    pub stage:  Stage,
    /// The error variant name, e.g. `"UndefinedVariable"`.
    pub kind:   &'static str,
    /// The rendered error message.
    pub detail: String,
}

impl Error {
    /// Returns the phase this error was raised in.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Lex(_) => Stage::Lex,
            Self::Parse(_) => Stage::Parse,
            Self::Runtime(_) => Stage::Runtime,
        }
    }

    /// Returns the name of the error variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Lex(e) => e.kind(),
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }

    /// Converts the error into its serializable description.
    ///
    /// # Example
    /// ```
    /// use polite::{error::Stage, run};
    ///
    /// let error = run("hello please say x thankyou goodbye").unwrap_err();
    /// let info = error.info();
    ///
    /// assert_eq!(info.stage, Stage::Runtime);
    /// assert_eq!(info.kind, "UndefinedVariable");
    /// ```
    #[must_use]
    pub fn info(&self) -> ErrorInfo {
        ErrorInfo { stage:  self.stage(),
                    kind:   self.kind(),
                    detail: self.to_string(), }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
