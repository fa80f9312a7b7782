/// Runtime values.
///
/// Defines the `Value` enum produced by evaluation, together with type
/// checks, equality and the conversions used by arithmetic.
pub mod core;
