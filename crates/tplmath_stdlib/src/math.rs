//! Math wrappers.
//!
//! Each wrapper coerces its arguments with `to_float64` (or `to_int` where the
//! argument is a count or sign), tags coercion failures with its own name,
//! and delegates to the float primitive. Special functions come from `libm`.

use tplmath_foundation::{Result, Value, to_float64, to_int};

fn arg(name: &'static str, value: &Value) -> Result<f64> {
    to_float64(value).map_err(|e| e.in_function(name))
}

fn args(name: &'static str, a: &Value, b: &Value) -> Result<(f64, f64)> {
    let a = to_float64(a).map_err(|e| e.at_operand(name, 0))?;
    let b = to_float64(b).map_err(|e| e.at_operand(name, 1))?;
    Ok((a, b))
}

macro_rules! unary_float {
    ($($(#[$attr:meta])* $name:ident => $op:expr;)*) => {
        $(
            $(#[$attr])*
            ///
            /// # Errors
            ///
            /// Returns a coercion error if the operand is not numeric.
            pub fn $name(value: &Value) -> Result<f64> {
                let x = arg(stringify!($name), value)?;
                Ok(($op)(x))
            }
        )*
    };
}

macro_rules! binary_float {
    ($($(#[$attr:meta])* $name:ident => $op:expr;)*) => {
        $(
            $(#[$attr])*
            ///
            /// # Errors
            ///
            /// Returns a coercion error tagged with the failing operand.
            pub fn $name(a: &Value, b: &Value) -> Result<f64> {
                let (a, b) = args(stringify!($name), a, b)?;
                Ok(($op)(a, b))
            }
        )*
    };
}

unary_float! {
    /// Sine of an angle in radians.
    sin => f64::sin;
    /// Cosine of an angle in radians.
    cos => f64::cos;
    /// Tangent of an angle in radians.
    tan => f64::tan;
    /// Arcsine, in radians.
    asin => f64::asin;
    /// Arccosine, in radians.
    acos => f64::acos;
    /// Arctangent, in radians.
    atan => f64::atan;
    /// Hyperbolic sine.
    sinh => f64::sinh;
    /// Hyperbolic cosine.
    cosh => f64::cosh;
    /// Hyperbolic tangent.
    tanh => f64::tanh;
    /// Inverse hyperbolic sine.
    asinh => f64::asinh;
    /// Inverse hyperbolic cosine.
    acosh => f64::acosh;
    /// Inverse hyperbolic tangent.
    atanh => f64::atanh;

    /// `e` raised to the operand.
    exp => f64::exp;
    /// 2 raised to the operand.
    exp2 => f64::exp2;
    /// `e^x - 1`, accurate near zero.
    expm1 => f64::exp_m1;
    /// Natural logarithm.
    log => f64::ln;
    /// Base-10 logarithm.
    log10 => f64::log10;
    /// `ln(1 + x)`, accurate near zero.
    log1p => f64::ln_1p;
    /// Base-2 logarithm.
    log2 => f64::log2;
    /// Binary exponent as a float.
    logb => logb_f64;
    /// Square root.
    sqrt => f64::sqrt;
    /// Cube root.
    cbrt => f64::cbrt;

    /// Error function.
    erf => libm::erf;
    /// Complementary error function.
    erfc => libm::erfc;
    /// Inverse error function.
    erfinv => erfinv_f64;
    /// Gamma function.
    gamma => libm::tgamma;

    /// Integer part, as a float.
    trunc => f64::trunc;

    /// Radians to degrees.
    degrees => f64::to_degrees;
    /// Degrees to radians.
    radians => f64::to_radians;
}

binary_float! {
    /// Arctangent of `y / x`, using both signs to pick the quadrant.
    atan2 => f64::atan2;
    /// `sqrt(p² + q²)` without intermediate overflow.
    hypot => f64::hypot;
    /// `x` raised to `y`.
    pow => f64::powf;
    /// Magnitude of `x` with the sign of `y`.
    copysign => f64::copysign;
}

fn logb_f64(x: f64) -> f64 {
    if x == 0.0 {
        f64::NEG_INFINITY
    } else if x.is_infinite() {
        f64::INFINITY
    } else if x.is_nan() {
        x
    } else {
        f64::from(libm::ilogb(x))
    }
}

fn ilogb_i32(x: f64) -> i32 {
    if x == 0.0 {
        i32::MIN
    } else if x.is_nan() || x.is_infinite() {
        i32::MAX
    } else {
        libm::ilogb(x)
    }
}

// Winitzki's closed form gets within about 1e-3; Newton steps on `erf` finish.
#[allow(clippy::float_cmp)]
fn erfinv_f64(y: f64) -> f64 {
    const A: f64 = 0.147;

    if y.is_nan() || y.abs() > 1.0 {
        return f64::NAN;
    }
    if y == 1.0 {
        return f64::INFINITY;
    }
    if y == -1.0 {
        return f64::NEG_INFINITY;
    }
    if y == 0.0 {
        return y;
    }

    let ln = (1.0 - y * y).ln();
    let t = 2.0 / (std::f64::consts::PI * A) + ln / 2.0;
    let mut x = ((t * t - ln / A).sqrt() - t).sqrt().copysign(y);

    let slope = 2.0 / std::f64::consts::PI.sqrt();
    for _ in 0..3 {
        let err = libm::erf(x) - y;
        x -= err / (slope * (-x * x).exp());
    }
    x
}

/// Binary exponent as an integer.
///
/// Zero gives `i32::MIN`; infinities and NaN give `i32::MAX`.
///
/// # Errors
///
/// Returns a coercion error if the operand is not numeric.
pub fn ilogb(value: &Value) -> Result<i64> {
    let x = arg("ilogb", value)?;
    Ok(i64::from(ilogb_i32(x)))
}

/// Reports whether the operand is negative or negative zero.
///
/// # Errors
///
/// Returns a coercion error if the operand is not numeric.
pub fn signbit(value: &Value) -> Result<bool> {
    let x = arg("signbit", value)?;
    Ok(x.is_sign_negative())
}

/// Positive infinity for a sign of zero or more, negative infinity otherwise.
///
/// # Errors
///
/// Returns a coercion error if the operand is not numeric.
pub fn inf(value: &Value) -> Result<f64> {
    let sign = to_int(value).map_err(|e| e.in_function("inf"))?;
    Ok(if sign >= 0 {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    })
}

/// Ten raised to an integer power.
///
/// Exponents below -323 give 0 and above 308 give positive infinity.
///
/// # Errors
///
/// Returns a coercion error if the operand is not numeric.
pub fn pow10(value: &Value) -> Result<f64> {
    let n = to_int(value).map_err(|e| e.in_function("pow10"))?;
    Ok(match n {
        n if n < -323 => 0.0,
        n if n > 308 => f64::INFINITY,
        // Parsing the decimal literal is exact where `powi` accumulates error.
        _ => format!("1e{n}").parse().unwrap_or(f64::NAN),
    })
}

/// The constant π.
#[must_use]
pub const fn pi() -> f64 {
    std::f64::consts::PI
}

/// Euler's number.
#[must_use]
pub const fn e() -> f64 {
    std::f64::consts::E
}
