//! The coerced numeric representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::Error;
use crate::format::format_float;

/// 2^63, the first float above the `i64` range.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// A coerced number: either an exact 64-bit integer or a 64-bit float.
///
/// Every arithmetic primitive works on this closed union. A result stays
/// `Int` until a `Float` operand takes part in the computation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// Exact signed integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
}

impl Number {
    /// Returns true if this is an exact integer.
    #[must_use]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns true if this is a float.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns the integer payload, if any.
    #[must_use]
    pub const fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(n),
            Self::Float(_) => None,
        }
    }

    /// Returns the float payload, if any.
    #[must_use]
    pub const fn as_float(self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(n),
            Self::Int(_) => None,
        }
    }

    /// Widens to `f64`.
    ///
    /// Integers beyond 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(n) => n,
        }
    }

    /// Truncates toward zero to `i64`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for NaN, infinities, and floats whose truncation
    /// does not fit in `i64`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::Int(n) => Ok(n),
            Self::Float(n) if n.is_finite() && (-I64_LIMIT..I64_LIMIT).contains(&n) => Ok(n as i64),
            Self::Float(n) => Err(Error::out_of_range(n)),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => f.write_str(&format_float(*n)),
        }
    }
}
