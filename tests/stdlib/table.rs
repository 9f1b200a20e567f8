//! Integration tests for the function table
//!
//! Tests registration, dispatch, aliases, and configuration.

use tplmath_foundation::{Arity, ErrorKind, Value};
use tplmath_stdlib::{FunctionTable, NativeFn, TableConfig};

#[test]
fn every_documented_name_is_registered() {
    let table = FunctionTable::standard();
    let names = [
        "atoi", "int", "int64", "float64", "number", "double", "add1", "add", "sub", "div",
        "mod", "mul", "biggest", "max", "min", "ceil", "floor", "round", "acos", "acosh", "asin",
        "asinh", "atan", "atan2", "atanh", "cbrt", "copysign", "cos", "cosh", "erf", "erfc",
        "erfinv", "exp", "exp2", "expm1", "gamma", "hypot", "ilogb", "inf", "log", "log10",
        "log1p", "log2", "logb", "pow", "pow10", "signbit", "sin", "sinh", "sqrt", "tan", "tanh",
        "trunc", "degrees", "radians", "pi", "e",
    ];
    for name in names {
        assert!(table.contains(name), "{name} is not registered");
    }
    assert_eq!(table.len(), names.len());
}

#[test]
fn arities_match_signatures() {
    let table = FunctionTable::standard();
    let arity = |name: &str| table.get(name).map(|f| f.arity);
    assert_eq!(arity("add"), Some(Arity::Variadic(1)));
    assert_eq!(arity("biggest"), Some(Arity::Variadic(1)));
    assert_eq!(arity("sub"), Some(Arity::Exact(2)));
    assert_eq!(arity("copysign"), Some(Arity::Exact(2)));
    assert_eq!(arity("ceil"), Some(Arity::Exact(1)));
    assert_eq!(arity("pi"), Some(Arity::Exact(0)));
}

#[test]
fn result_kinds() {
    let table = FunctionTable::standard();
    let one = |name: &str, value: Value| table.call(name, &[value]).unwrap();

    assert_eq!(one("number", Value::from("5")), Value::I64(5));
    assert_eq!(one("number", Value::from("5.5")), Value::F64(5.5));
    assert_eq!(one("int", Value::from(5.9)), Value::I64(5));
    assert_eq!(one("float64", Value::from(5i64)), Value::F64(5.0));
    assert_eq!(one("atoi", Value::from("12")), Value::I64(12));
    assert_eq!(one("ceil", Value::from(1.1)), Value::I64(2));
    assert_eq!(one("floor", Value::from(1.9)), Value::F64(1.0));
    assert_eq!(one("ilogb", Value::from(8i64)), Value::I64(3));
    assert_eq!(one("signbit", Value::from(-2i64)), Value::Bool(true));
    assert_eq!(one("inf", Value::from(-1i64)), Value::F64(f64::NEG_INFINITY));
    assert_eq!(one("pow10", Value::from(2i64)), Value::F64(100.0));
}

#[test]
fn atoi_is_strict() {
    let table = FunctionTable::standard();
    let err = table.call("atoi", &[Value::from(12i64)]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
}

#[test]
fn dispatch_errors() {
    let table = FunctionTable::standard();

    let err = table.call("pi", &[Value::from(1i64)]).unwrap_err();
    assert_eq!(err.to_string(), "pi: wrong number of arguments: expected 0, got 1");

    let err = table.call("max", &[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "max: wrong number of arguments: expected at least 1, got 0"
    );

    let err = table.call("nope", &[]).unwrap_err();
    assert_eq!(err.to_string(), "function \"nope\" not defined");
}

#[test]
fn host_table_overlay() {
    fn upper(args: &[Value]) -> tplmath_foundation::Result<Value> {
        Ok(Value::from(
            args.first().and_then(Value::as_str).unwrap_or_default().to_uppercase(),
        ))
    }
    fn host_add(_: &[Value]) -> tplmath_foundation::Result<Value> {
        Ok(Value::from("host"))
    }

    let mut host = FunctionTable::new();
    host.register(NativeFn::new("upper", Arity::Exact(1), upper));
    host.register(NativeFn::new("add", Arity::Variadic(0), host_add));

    let table = FunctionTable::standard().overlay(host);
    assert_eq!(table.call("upper", &[Value::from("ab")]).unwrap(), Value::from("AB"));
    assert_eq!(
        table.call("add", &[Value::from(1i64), Value::from(2i64)]).unwrap(),
        Value::I64(3)
    );
}

#[test]
fn configured_tables() {
    let table = FunctionTable::with_config(TableConfig::default().with_aliases(false));
    assert!(!table.contains("biggest"));
    assert!(!table.contains("double"));
    assert!(table.contains("max"));

    let table = FunctionTable::with_config(
        TableConfig::empty().with_conversions(true).with_aliases(true),
    );
    assert!(table.contains("double"));
    assert!(!table.contains("biggest"));
    assert!(!table.contains("add"));
}

#[test]
fn extend_registers_entries() {
    fn zero(_: &[Value]) -> tplmath_foundation::Result<Value> {
        Ok(Value::I64(0))
    }
    let mut table = FunctionTable::new();
    table.extend([NativeFn::new("zero", Arity::Exact(0), zero)]);
    assert_eq!(table.names(), vec!["zero"]);
    assert_eq!(table.iter().count(), 1);
    assert_eq!(table.call("zero", &[]).unwrap(), Value::I64(0));
}
