//! Integration tests for the math wrappers
//!
//! Tests coercion of arguments and delegation to the float primitives.

use tplmath_foundation::Value;
use tplmath_stdlib::math;

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-12 * expected.abs().max(1.0),
        "{actual} != {expected}"
    );
}

#[test]
fn wrappers_accept_text_and_integers() {
    approx(math::sqrt(&Value::from("16")).unwrap(), 4.0);
    approx(math::exp(&Value::from(0u8)).unwrap(), 1.0);
    approx(math::log(&Value::from(math::e())).unwrap(), 1.0);
    approx(math::log2(&Value::from(1024i64)).unwrap(), 10.0);
    approx(math::log10(&Value::from("1000")).unwrap(), 3.0);
    approx(math::cbrt(&Value::from(-27i64)).unwrap(), -3.0);
    approx(math::exp2(&Value::from(3i64)).unwrap(), 8.0);
}

#[test]
fn trig_round_trip() {
    let x = Value::from(0.6);
    let y = math::sin(&x).unwrap();
    approx(math::asin(&Value::from(y)).unwrap(), 0.6);
    approx(math::tanh(&Value::from(0i64)).unwrap(), 0.0);
    approx(math::acosh(&Value::from(1i64)).unwrap(), 0.0);
}

#[test]
fn precise_near_zero() {
    approx(math::expm1(&Value::from(1e-10)).unwrap(), 1e-10);
    approx(math::log1p(&Value::from(1e-10)).unwrap(), 1e-10);
}

#[test]
fn domain_errors_are_nan_not_errors() {
    assert!(math::sqrt(&Value::from(-1i64)).unwrap().is_nan());
    assert!(math::log(&Value::from(-1i64)).unwrap().is_nan());
    assert_eq!(math::log(&Value::from(0i64)).unwrap(), f64::NEG_INFINITY);
}

#[test]
fn two_argument_wrappers() {
    approx(math::pow(&Value::from("2"), &Value::from(0.5)).unwrap(), 2f64.sqrt());
    approx(math::atan2(&Value::from(0i64), &Value::from(-1i64)).unwrap(), std::f64::consts::PI);
    approx(math::copysign(&Value::from(2.5), &Value::from(-0.0)).unwrap(), -2.5);
}

#[test]
fn trunc_keeps_float() {
    assert_eq!(math::trunc(&Value::from(-2.7)).unwrap(), -2.0);
}

#[test]
fn errors_name_the_wrapper() {
    let err = math::gamma(&Value::from("bob")).unwrap_err();
    assert_eq!(err.to_string(), "gamma: cannot convert bob to float64");

    let err = math::hypot(&Value::from("p"), &Value::from(1i64)).unwrap_err();
    assert_eq!(err.to_string(), "hypot[arg0]: cannot convert p to float64");

    let err = math::pow10(&Value::Nil).unwrap_err();
    assert_eq!(err.to_string(), "pow10: cannot convert <nil> to int64");
}
