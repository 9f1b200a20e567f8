//! Arithmetic primitives.
//!
//! Variadic functions take a required first operand plus a slice of further
//! operands, so calling one with no operands is unrepresentable. Integer
//! arithmetic wraps on overflow.

use tplmath_foundation::{Error, ErrorKind, Number, Result, Value, to_float64, to_number};

use crate::fold::{Fold, fold};

const ADD: Fold = Fold {
    name: "add",
    int_step: i64::wrapping_add,
    float_step: |a, b| a + b,
};

const MUL: Fold = Fold {
    name: "mul",
    int_step: i64::wrapping_mul,
    float_step: |a, b| a * b,
};

const MAX: Fold = Fold {
    name: "max",
    int_step: |a, b| a.max(b),
    float_step: max_f64,
};

const MIN: Fold = Fold {
    name: "min",
    int_step: |a, b| a.min(b),
    float_step: min_f64,
};

// `f64::max` ignores NaN; a NaN operand must poison the result instead.
fn max_f64(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn min_f64(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Sums all operands.
///
/// The result is an integer unless some operand is a float.
///
/// # Errors
///
/// Returns the coercion error of the first non-numeric operand.
pub fn add(first: &Value, rest: &[Value]) -> Result<Number> {
    fold(&ADD, first, rest)
}

/// Multiplies all operands.
///
/// # Errors
///
/// Returns the coercion error of the first non-numeric operand.
pub fn mul(first: &Value, rest: &[Value]) -> Result<Number> {
    fold(&MUL, first, rest)
}

/// Returns the largest operand.
///
/// Integers and floats are compared within their own kind; if any float is
/// present the integer maximum is widened and compared with the float maximum.
///
/// # Errors
///
/// Returns the coercion error of the first non-numeric operand.
pub fn max(first: &Value, rest: &[Value]) -> Result<Number> {
    fold(&MAX, first, rest)
}

/// Returns the smallest operand.
///
/// # Errors
///
/// Returns the coercion error of the first non-numeric operand.
pub fn min(first: &Value, rest: &[Value]) -> Result<Number> {
    fold(&MIN, first, rest)
}

/// Adds one, keeping the operand's kind.
///
/// # Errors
///
/// Returns a coercion error if the operand is not numeric.
pub fn add1(value: &Value) -> Result<Number> {
    Ok(match to_number(value).map_err(|e| e.in_function("add1"))? {
        Number::Int(n) => Number::Int(n.wrapping_add(1)),
        Number::Float(n) => Number::Float(n + 1.0),
    })
}

/// Two coerced operands, widened to a common kind.
enum Operands {
    Ints(i64, i64),
    Floats(f64, f64),
}

#[allow(clippy::cast_precision_loss)]
fn operands(name: &'static str, a: &Value, b: &Value) -> Result<Operands> {
    let a = to_number(a).map_err(|e| e.at_operand(name, 0))?;
    let b = to_number(b).map_err(|e| e.at_operand(name, 1))?;
    Ok(match (a, b) {
        (Number::Int(a), Number::Int(b)) => Operands::Ints(a, b),
        (Number::Float(a), Number::Float(b)) => Operands::Floats(a, b),
        (Number::Int(a), Number::Float(b)) => Operands::Floats(a as f64, b),
        (Number::Float(a), Number::Int(b)) => Operands::Floats(a, b as f64),
    })
}

/// Subtracts `b` from `a`.
///
/// # Errors
///
/// Returns a coercion error tagged with the failing operand.
pub fn sub(a: &Value, b: &Value) -> Result<Number> {
    Ok(match operands("sub", a, b)? {
        Operands::Ints(a, b) => Number::Int(a.wrapping_sub(b)),
        Operands::Floats(a, b) => Number::Float(a - b),
    })
}

/// Divides `a` by `b` in floating point.
///
/// Two integers still produce a float (`div 6 3` is `2.0`). Division by zero
/// follows IEEE semantics and yields an infinity or NaN.
///
/// # Errors
///
/// Returns a coercion error tagged with the failing operand.
pub fn div(a: &Value, b: &Value) -> Result<f64> {
    let a = to_float64(a).map_err(|e| e.at_operand("div", 0))?;
    let b = to_float64(b).map_err(|e| e.at_operand("div", 1))?;
    Ok(a / b)
}

/// Remainder of `a` divided by `b`.
///
/// Integers use the truncating remainder. If either operand is a float the
/// result is a float whose sign follows the dividend.
///
/// # Errors
///
/// Returns a coercion error tagged with the failing operand, or
/// [`ErrorKind::DivisionByZero`] for an integer divisor of zero.
pub fn modulo(a: &Value, b: &Value) -> Result<Number> {
    Ok(match operands("mod", a, b)? {
        Operands::Ints(_, 0) => {
            return Err(Error::new(ErrorKind::DivisionByZero).in_function("mod"));
        }
        Operands::Ints(a, b) => Number::Int(a.wrapping_rem(b)),
        Operands::Floats(a, b) => Number::Float(a % b),
    })
}

/// Rounds up to the nearest integer.
///
/// # Errors
///
/// Returns a coercion error if the operand is not numeric, and `OutOfRange`
/// if the rounded value is NaN, infinite, or beyond the `i64` range.
pub fn ceil(value: &Value) -> Result<i64> {
    let n = to_float64(value).map_err(|e| e.in_function("ceil"))?;
    Number::Float(n.ceil())
        .to_i64()
        .map_err(|e| e.in_function("ceil"))
}

/// Rounds down, returning a float.
///
/// # Errors
///
/// Returns a coercion error if the operand is not numeric.
pub fn floor(value: &Value) -> Result<f64> {
    let n = to_float64(value).map_err(|e| e.in_function("floor"))?;
    Ok(n.floor())
}

/// Rounds half away from zero.
///
/// # Errors
///
/// Returns a coercion error if the operand is not numeric, and `OutOfRange`
/// if the rounded value is NaN, infinite, or beyond the `i64` range.
pub fn round(value: &Value) -> Result<i64> {
    let n = to_float64(value).map_err(|e| e.in_function("round"))?;
    Number::Float(n.round())
        .to_i64()
        .map_err(|e| e.in_function("round"))
}
