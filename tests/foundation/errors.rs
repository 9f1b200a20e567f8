//! Integration tests for Error types
//!
//! Tests error construction, call-site tagging, and display.

use std::error::Error as _;

use tplmath_foundation::{Arity, CallSite, Error, ErrorKind, Target, Type};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_not_numeric() {
    let err = Error::not_numeric("bob", Target::Float64);
    assert!(err.is_coercion());
    assert_eq!(err.site, None);
    assert_eq!(err.to_string(), "cannot convert bob to float64");
}

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch(Type::String, Type::Bool);
    assert!(!err.is_coercion());
    assert_eq!(err.to_string(), "type mismatch: expected string, got bool");
}

#[test]
fn error_arity_mismatch() {
    let err = Error::arity_mismatch(Arity::Variadic(1), 0);
    assert_eq!(
        err.to_string(),
        "wrong number of arguments: expected at least 1, got 0"
    );
}

#[test]
fn error_unknown_function() {
    let err = Error::unknown_function("frob");
    assert_eq!(err.to_string(), "function \"frob\" not defined");
}

#[test]
fn error_parse() {
    let err = Error::parse("unexpected token", 4);
    assert_eq!(err.to_string(), "parse error at column 4: unexpected token");
}

#[test]
fn error_from_kind() {
    let err: Error = ErrorKind::DivisionByZero.into();
    assert_eq!(err.to_string(), "integer division by zero");
}

// =============================================================================
// Call Sites
// =============================================================================

#[test]
fn operand_site_prefixes_message() {
    let err = Error::not_numeric("bob", Target::Number).at_operand("mul", 0);
    assert_eq!(err.site, Some(CallSite::operand("mul", 0)));
    assert_eq!(err.to_string(), "mul[arg0]: cannot convert bob to float64 or int64");
}

#[test]
fn function_site_has_no_index() {
    let err = Error::not_numeric("x", Target::Float64).in_function("ceil");
    assert_eq!(err.to_string(), "ceil: cannot convert x to float64");
}

#[test]
fn first_site_wins() {
    let err = Error::overflow(u64::MAX)
        .at_operand("add", 2)
        .in_function("biggest");
    assert_eq!(err.site, Some(CallSite::operand("add", 2)));
    assert_eq!(err.to_string(), "add[arg2]: 18446744073709551615 is too big");
}

#[test]
fn source_is_the_kind() {
    let err = Error::new(ErrorKind::Io("gone".to_string())).in_function("render");
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("i/o error: gone"));
}
