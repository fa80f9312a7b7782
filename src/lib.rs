//! # polite
//!
//! polite is an interpreter for a small language with manners. Every program
//! starts with `hello` and ends with `goodbye`, and every statement is
//! wrapped in `please ... thankyou`.
//!
//! ```text
//! hello
//!     please call a 1 thankyou
//!     please whilst a isnt 3 naturally
//!         please call a a + 1 thankyou
//!     thankyou
//!     please say a thankyou
//! goodbye
//! ```
//!
//! Source text flows through a lexer, a recursive-descent parser and a
//! tree-walking evaluator. [`run`] drives the whole pipeline and returns the
//! values emitted by `say`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use serde::Serialize;

use crate::{
    error::{Error, ErrorInfo},
    interpreter::{
        evaluator::{core::Context, limits::Limits},
        lexer::tokenize,
        parser::core::parse,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and the `Program`
/// root that the parser builds and the evaluator walks. Nodes own their
/// children, so a program is a strict tree.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Each phase has its own error enum; [`error::Error`] wraps whichever one
/// ended a run and can describe itself as a serializable
/// [`error::ErrorInfo`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// Ties together the lexer, parser, evaluator and value types.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Runs a program and returns the values emitted by `say`, in order.
///
/// Each call starts from an empty variable table, so the result depends on
/// the source text alone. The source is tokenized completely before parsing
/// starts, which means a lexical error always wins over a syntax error.
///
/// There are no limits: a loop whose test never becomes false blocks the
/// calling thread. Use [`run_with_limits`] for untrusted programs.
///
/// # Errors
/// Returns the first lexical, syntax, or runtime error.
///
/// # Examples
/// ```
/// use polite::{interpreter::value::core::Value, run};
///
/// let outputs = run("hello please say 1+2 is 3 thankyou goodbye").unwrap();
/// assert_eq!(outputs, vec![Value::Bool(true)]);
///
/// // `x` was never called anything.
/// assert!(run("hello please say x thankyou goodbye").is_err());
/// ```
pub fn run(source: &str) -> Result<Vec<Value>, Error> {
    run_with_limits(source, Limits::default())
}

/// Runs a program like [`run`], stopping with a `Timeout` error once any of
/// `limits` is exceeded.
///
/// # Errors
/// Returns the first lexical, syntax, or runtime error.
pub fn run_with_limits(source: &str, limits: Limits) -> Result<Vec<Value>, Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    let outputs = Context::with_limits(limits).run(&program)?;

    Ok(outputs)
}

/// The caller-visible result of a run.
///
/// Serializes as `{"outputs": [...]}` on success or
/// `{"error": {"stage": ..., "kind": ..., "detail": ...}}` on failure. A
/// failed run reports no outputs, even if some were produced before the
/// error.
///
/// # Example
/// ```
/// use polite::{Outcome, run};
///
/// let outcome = Outcome::from(run("hello please say 6/3 thankyou goodbye"));
/// assert_eq!(serde_json::to_string(&outcome).unwrap(), r#"{"outputs":[2.0]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Values emitted by `say`.
    Outputs(Vec<Value>),
    /// The error that ended the run.
    Error(ErrorInfo),
}

impl From<Result<Vec<Value>, Error>> for Outcome {
    fn from(result: Result<Vec<Value>, Error>) -> Self {
        match result {
            Ok(outputs) => Self::Outputs(outputs),
            Err(e) => Self::Error(e.info()),
        }
    }
}
