/// The evaluator module executes the syntax tree.
///
/// The evaluator walks a parsed program statement by statement against a
/// single variable environment, collecting the values emitted by `say` and
/// stopping at the first runtime error.
///
/// # Responsibilities
/// - Evaluates expressions and executes statements.
/// - Owns the variable environment for the duration of one run.
/// - Enforces host-imposed limits on runaway programs.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens for integers,
/// strings, identifiers, operators and the keywords of polite conversation.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Gives keywords priority over identifiers.
/// - Reports impolite characters and unterminated strings.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with a single token of lookahead. It enforces
/// the `hello ... goodbye` frame and the `please ... thankyou` wrapping of
/// every statement.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
