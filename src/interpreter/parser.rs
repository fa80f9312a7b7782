/// Binary operator parsing.
///
/// Implements the left-associative precedence levels: comparisons (`is`,
/// `isnt`) at the bottom, then addition and subtraction, then
/// multiplication and division.
pub mod binary;
/// Statement body parsing.
///
/// Parses the run of statements that follows `naturally` in conditionals
/// and loops.
pub mod block;
/// Core parsing entry points.
///
/// Contains the program rule, the expression entry point and the shared
/// result type.
pub mod core;
/// Statement parsing.
///
/// Parses `please ... thankyou` commands and everything that can appear
/// between the two keywords.
pub mod statement;
/// Unary and primary expression parsing.
///
/// Handles prefix `+` / `-`, literals, variable references and
/// parenthesized expressions.
pub mod unary;
/// Parser helpers.
///
/// Lookahead with an implicit end of input, token expectations and
/// identifiers.
pub mod utils;
