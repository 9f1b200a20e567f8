//! Integration tests for coercion
//!
//! Tests the three coercion entry points against every kind of raw operand.

use proptest::prelude::*;
use tplmath_foundation::{
    ErrorKind, Number, Target, Value, to_float64, to_int, to_int64, to_number,
};

// =============================================================================
// to_number
// =============================================================================

#[test]
fn integer_text_stays_exact() {
    assert_eq!(to_number(&Value::from("5")).unwrap(), Number::Int(5));
    assert_eq!(
        to_number(&Value::from("9223372036854775807")).unwrap(),
        Number::Int(i64::MAX)
    );
}

#[test]
fn float_text_becomes_float() {
    assert_eq!(to_number(&Value::from("5.5")).unwrap(), Number::Float(5.5));
    assert_eq!(to_number(&Value::from("-0.25")).unwrap(), Number::Float(-0.25));
}

#[test]
fn non_numeric_text_is_rejected() {
    let err = to_number(&Value::from("bob")).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::NotNumeric {
            value: "bob".to_string(),
            target: Target::Number,
        }
    );
    assert_eq!(err.to_string(), "cannot convert bob to float64 or int64");
}

#[test]
fn booleans_are_zero_and_one() {
    assert_eq!(to_number(&Value::from(true)).unwrap(), Number::Int(1));
    assert_eq!(to_number(&Value::from(false)).unwrap(), Number::Int(0));
}

#[test]
fn large_unsigned_overflows() {
    let err = to_number(&Value::from(u64::MAX)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Overflow(u64::MAX));
    assert_eq!(err.to_string(), "18446744073709551615 is too big");

    let boundary = i64::MAX.unsigned_abs();
    assert_eq!(to_number(&Value::from(boundary)).unwrap(), Number::Int(i64::MAX));
    assert!(to_number(&Value::from(boundary + 1)).is_err());
}

#[test]
fn nil_and_containers_are_not_numeric() {
    assert!(to_number(&Value::Nil).is_err());
    assert!(to_number(&Value::List(vec![Value::from(1i64)])).is_err());
}

#[test]
fn coercing_a_number_is_identity() {
    for n in [Number::Int(42), Number::Float(-3.75)] {
        let once = to_number(&Value::from(n)).unwrap();
        let twice = to_number(&Value::from(once)).unwrap();
        assert_eq!(once, n);
        assert_eq!(twice, n);
    }
}

// =============================================================================
// to_int64 / to_int
// =============================================================================

#[test]
fn floats_truncate_toward_zero() {
    assert_eq!(to_int64(&Value::from(2.7)).unwrap(), 2);
    assert_eq!(to_int64(&Value::from(-2.7)).unwrap(), -2);
    assert_eq!(to_int64(&Value::from("2.7")).unwrap(), 2);
    assert_eq!(to_int(&Value::from(9.99f32)).unwrap(), 9);
}

#[test]
fn int_and_int64_agree() {
    for value in [Value::from("12"), Value::from(3.5), Value::from(true), Value::from(7u16)] {
        assert_eq!(to_int(&value).unwrap(), to_int64(&value).unwrap());
    }
}

#[test]
fn int64_error_names_target() {
    let err = to_int64(&Value::from("x")).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert x to int64");
}

#[test]
fn unrepresentable_floats_are_out_of_range() {
    let err = to_int(&Value::from("1e300")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::OutOfRange(1e300));
    assert!(err.is_coercion());

    let err = to_int64(&Value::from(f64::NEG_INFINITY)).unwrap_err();
    assert_eq!(err.to_string(), "-Inf is out of range for int64");

    let err = to_int64(&Value::from("NaN")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OutOfRange(n) if n.is_nan()));
}

proptest! {
    #[test]
    fn in_range_floats_truncate(f in -9.0e18f64..9.0e18) {
        #[allow(clippy::cast_possible_truncation)]
        let expected = f.trunc() as i64;
        prop_assert_eq!(to_int64(&Value::from(f)).unwrap(), expected);
    }

    #[test]
    fn out_of_range_floats_fail(f in 9.3e18f64..f64::MAX, negative in any::<bool>()) {
        let f = if negative { -f } else { f };
        let err = to_int64(&Value::from(f)).unwrap_err();
        prop_assert_eq!(err.kind, ErrorKind::OutOfRange(f));
    }
}

// =============================================================================
// to_float64
// =============================================================================

#[test]
fn integers_widen_to_float() {
    assert_eq!(to_float64(&Value::from(3i64)).unwrap(), 3.0);
    assert_eq!(to_float64(&Value::from("3")).unwrap(), 3.0);
    assert_eq!(to_float64(&Value::from(1.5f32)).unwrap(), 1.5);
}

#[test]
fn float64_rejects_large_unsigned() {
    let err = to_float64(&Value::from(u64::MAX)).unwrap_err();
    assert!(err.is_coercion());
    assert_eq!(err.kind, ErrorKind::Overflow(u64::MAX));
}

#[test]
fn float64_error_names_target() {
    let err = to_float64(&Value::from("bob")).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert bob to float64");
}
