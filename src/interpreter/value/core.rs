use serde::Serialize;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{i64_equals_f64, i64_to_f64},
};

/// Represents a runtime value in the interpreter.
///
/// Serializes untagged, so a JSON rendering shows the bare number, string
/// or boolean.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A real value. Only produced by division, or arithmetic involving the
    /// result of a division.
    Real(f64),
    /// A text value.
    Text(String),
    /// A boolean value, produced by `is` and `isnt`. The only type accepted
    /// as the test of a conditional or loop.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl Value {
    /// Returns the user facing name of the value's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
            Self::Bool(_) => "boolean",
        }
    }

    /// Returns `true` for integers and reals.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integers beyond 2^53 in magnitude round to the nearest real.
    ///
    /// # Example
    /// ```
    /// use polite::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(1).unwrap(), 10.0);
    /// assert_eq!(Value::Integer(9_007_199_254_740_993).as_real(1).unwrap(),
    ///            9_007_199_254_740_992.0);
    /// assert!(Value::Bool(true).as_real(1).is_err());
    /// ```
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            _ => Err(RuntimeError::TypeMismatch { details: format!("expected a number, found {}",
                                                                   self.type_name()),
                                                  line }),
        }
    }

    /// Returns the boolean, or a `TypeMismatch` for any other type.
    ///
    /// There is no truthiness: `0`, `""` and friends are not booleans.
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::TypeMismatch { details: format!("expected a boolean, found {}",
                                                                   self.type_name()),
                                                  line }),
        }
    }

    /// Value equality as used by `is`.
    ///
    /// Integers and reals compare by numeric value. Any other pair of
    /// differing types is unequal, never an error.
    ///
    /// # Example
    /// ```
    /// use polite::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(2).loosely_equals(&Value::Real(2.0)));
    /// assert!(!Value::Integer(1).loosely_equals(&Value::Bool(true)));
    /// assert!(Value::from("a").loosely_equals(&Value::from("a")));
    /// ```
    #[must_use]
    pub fn loosely_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Real(b)) | (Self::Real(b), Self::Integer(a)) => {
                i64_equals_f64(*a, *b)
            },
            _ => self == other,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write_real(f, *r),
            Self::Text(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Writes a real in its shortest round-trip form.
///
/// Positional notation is used for decimal exponents from -4 to 15 and
/// always keeps a fractional part (`2.0`). Outside that range the value is
/// written in scientific notation with a signed, at least two digit
/// exponent (`1e+16`, `2.5e-07`).
fn write_real(f: &mut std::fmt::Formatter<'_>, r: f64) -> std::fmt::Result {
    let scientific = format!("{r:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e')
    else {
        return write!(f, "{r:?}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return write!(f, "{r:?}");
    };

    if (-4..16).contains(&exponent) {
        write!(f, "{r:?}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
