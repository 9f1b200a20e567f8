//! Host-style rendering of floating-point numbers.
//!
//! Templates print floats the way Go's `%v` verb does: the shortest digits
//! that round-trip, switching to exponent notation (`1e+06`, `1.5e-07`) for
//! very large and very small magnitudes, and `+Inf`/`-Inf`/`NaN` for
//! non-finite values.

/// Decimal exponents at or above this use exponent notation.
const EXPONENT_HIGH: i32 = 6;

/// Decimal exponents below this use exponent notation.
const EXPONENT_LOW: i32 = -4;

/// Formats a 64-bit float in template style.
#[must_use]
pub fn format_float(v: f64) -> String {
    if let Some(special) = non_finite(v.is_nan(), v.is_infinite(), v.is_sign_negative()) {
        return special.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    layout(&format!("{v:e}"), || format!("{v}"))
}

/// Formats a 32-bit float in template style, using the shortest digits that
/// round-trip at 32-bit precision.
#[must_use]
pub fn format_float32(v: f32) -> String {
    if let Some(special) = non_finite(v.is_nan(), v.is_infinite(), v.is_sign_negative()) {
        return special.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    layout(&format!("{v:e}"), || format!("{v}"))
}

fn non_finite(nan: bool, infinite: bool, negative: bool) -> Option<&'static str> {
    if nan {
        Some("NaN")
    } else if infinite {
        Some(if negative { "-Inf" } else { "+Inf" })
    } else {
        None
    }
}

/// Chooses between exponent and plain notation given the `{:e}` rendering.
fn layout(scientific: &str, plain: impl FnOnce() -> String) -> String {
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return plain();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return plain();
    };

    if (EXPONENT_LOW..EXPONENT_HIGH).contains(&exponent) {
        plain()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
