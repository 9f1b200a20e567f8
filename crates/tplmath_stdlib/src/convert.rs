//! Conversion functions.
//!
//! `int`, `int64`, `float64`, `double` and `number` are the coercion engine
//! itself; only `atoi` has rules of its own.

use tplmath_foundation::{Error, Result, Target, Type, Value};

/// Parses a decimal integer from a string.
///
/// Unlike `int`, `atoi` does not coerce: the operand must already be a
/// string, and floats in text are rejected.
///
/// # Errors
///
/// Returns a type mismatch for a non-string operand, or a not-numeric error
/// if the text is not a base-10 `i64`.
pub fn atoi(value: &Value) -> Result<i64> {
    let Value::String(text) = value else {
        return Err(Error::type_mismatch(Type::String, value.value_type()).in_function("atoi"));
    };
    text.parse::<i64>().map_err(|_| {
        Error::not_numeric(text.to_string(), Target::Int64).in_function("atoi")
    })
}
