//! Numeric coercion of raw operands.
//!
//! Every template function that does arithmetic first normalizes its operands
//! here. The rules are shared by all three entry points:
//!
//! - strings parse as a base-10 `i64` first, then as a float
//! - booleans become `0` or `1`
//! - signed integers and unsigned integers up to 32 bits widen to `i64`
//! - 64-bit and platform-width unsigned integers must fit in `i64`, otherwise
//!   coercion fails with [`ErrorKind::Overflow`](crate::ErrorKind::Overflow)
//! - both float widths widen to `f64`
//! - nil, lists and maps have no numeric interpretation
//!
//! The entry points differ only in what they do with the coerced [`Number`]:
//! [`to_number`] keeps it, [`to_int64`] truncates floats toward zero (failing
//! with [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) when there is
//! no `i64` to truncate to), and [`to_float64`] widens integers.

use std::fmt;

use crate::error::Error;
use crate::number::Number;
use crate::value::Value;
use crate::Result;

/// The representation a coercion was aiming for; shown in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Either an integer or a float.
    Number,
    /// A signed 64-bit integer.
    Int64,
    /// A 64-bit float.
    Float64,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Number => "float64 or int64",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
        })
    }
}

/// Coerces a value into an exact integer or a float.
///
/// # Errors
///
/// Returns `NotNumeric` if the value has no numeric interpretation and
/// `Overflow` for unsigned values above `i64::MAX`.
pub fn to_number(value: &Value) -> Result<Number> {
    coerce(value, Target::Number)
}

/// Coerces a value into an `i64`, truncating floats toward zero.
///
/// # Errors
///
/// Same conditions as [`to_number`], plus `OutOfRange` for NaN, infinities,
/// and floats beyond the `i64` range.
pub fn to_int64(value: &Value) -> Result<i64> {
    coerce(value, Target::Int64)?.to_i64()
}

/// Coerces a value into a platform `int`.
///
/// On the 64-bit hosts this crate targets, `int` and `int64` coincide.
///
/// # Errors
///
/// Same conditions as [`to_int64`].
pub fn to_int(value: &Value) -> Result<i64> {
    to_int64(value)
}

/// Coerces a value into an `f64`, widening integers.
///
/// # Errors
///
/// Same conditions as [`to_number`].
pub fn to_float64(value: &Value) -> Result<f64> {
    coerce(value, Target::Float64).map(Number::to_f64)
}

impl TryFrom<&Value> for Number {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        to_number(value)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn coerce(value: &Value, target: Target) -> Result<Number> {
    let number = match value {
        Value::String(s) => {
            return parse_number(s).ok_or_else(|| Error::not_numeric(s.to_string(), target));
        }
        Value::Bool(b) => Number::Int(i64::from(*b)),
        Value::I8(n) => Number::Int(i64::from(*n)),
        Value::I16(n) => Number::Int(i64::from(*n)),
        Value::I32(n) => Number::Int(i64::from(*n)),
        Value::I64(n) => Number::Int(*n),
        // isize is at most 64 bits on every supported target
        Value::Isize(n) => Number::Int(*n as i64),
        Value::U8(n) => Number::Int(i64::from(*n)),
        Value::U16(n) => Number::Int(i64::from(*n)),
        Value::U32(n) => Number::Int(i64::from(*n)),
        Value::U64(n) => return unsigned(*n),
        Value::Usize(n) => return unsigned(*n as u64),
        Value::F32(n) => Number::Float(f64::from(*n)),
        Value::F64(n) => Number::Float(*n),
        Value::Nil | Value::List(_) | Value::Map(_) => {
            return Err(Error::not_numeric(value.to_string(), target));
        }
    };
    Ok(number)
}

fn unsigned(n: u64) -> Result<Number> {
    i64::try_from(n)
        .map(Number::Int)
        .map_err(|_| Error::overflow(n))
}

/// Parses text as an integer first, then as a float.
///
/// Floats are decimal or hexadecimal with a binary exponent (`0x1p-2`). Text
/// is not trimmed and digit separators are not accepted. A float literal
/// whose magnitude overflows to infinity is rejected unless the text spells
/// out an infinity.
fn parse_number(text: &str) -> Option<Number> {
    if let Ok(n) = text.parse::<i64>() {
        return Some(Number::Int(n));
    }

    let f = text.parse::<f64>().ok().or_else(|| parse_hex_float(text))?;
    if f.is_infinite() && !text.to_ascii_lowercase().contains("inf") {
        return None;
    }
    Some(Number::Float(f))
}

/// Parses `[sign]0x<hex digits>[.<hex digits>]p<exponent>`.
fn parse_hex_float(text: &str) -> Option<f64> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let rest = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"))?;
    let (mantissa, exponent) = rest.split_once(['p', 'P'])?;
    let exponent: i32 = exponent.parse().ok()?;

    // Keep 60 significant bits; anything dropped sets a sticky low bit so the
    // final conversion still rounds to nearest.
    let mut bits: u64 = 0;
    let mut shift: i64 = 0;
    let mut digits = 0;
    let mut seen_point = false;
    let mut sticky = false;
    for c in mantissa.chars() {
        if c == '.' {
            if seen_point {
                return None;
            }
            seen_point = true;
            continue;
        }
        let digit = c.to_digit(16)?;
        digits += 1;
        if bits >> 56 == 0 {
            bits = (bits << 4) | u64::from(digit);
            if seen_point {
                shift -= 4;
            }
        } else {
            sticky |= digit != 0;
            if !seen_point {
                shift += 4;
            }
        }
    }
    if digits == 0 {
        return None;
    }
    if sticky {
        bits |= 1;
    }

    // Past this range the result is already zero or infinite.
    let mut exp = (i64::from(exponent) + shift).clamp(-2200, 2200);
    #[allow(clippy::cast_precision_loss)]
    let mut value = bits as f64;
    while exp > 1000 {
        value *= 2f64.powi(1000);
        exp -= 1000;
    }
    while exp < -1000 {
        value *= 2f64.powi(-1000);
        exp += 1000;
    }
    value *= 2f64.powi(i32::try_from(exp).ok()?);
    Some(if negative { -value } else { value })
}
