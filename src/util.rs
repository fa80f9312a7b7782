/// Numeric conversion helpers.
///
/// Conversion and comparison between `i64` and `f64`. Used by division,
/// which always works on reals, and by equality between integers and reals.
pub mod num;
