/// Binary operator evaluation.
///
/// Implements arithmetic (`+ - * /`) and the `is` / `isnt` comparisons.
pub mod binary;
/// Conditionals and loops.
///
/// Executes `perchance` and `whilst` statements, enforcing boolean tests.
pub mod control_flow;
/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the expression and statement dispatch,
/// and the program entry point.
pub mod core;
/// The variable table.
pub mod environment;
/// Host-imposed execution limits.
///
/// Step counts, wall clock deadlines and cancellation, all surfacing as
/// `RuntimeError::Timeout`.
pub mod limits;
/// Unary operator evaluation.
pub mod unary;
