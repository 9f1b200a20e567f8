//! Integration tests for template rendering
//!
//! Each case renders a template against the standard function table and
//! checks the exact output.

use tplmath_runtime::render;
use tplmath_stdlib::{FunctionTable, TableConfig};

fn runt(template: &str, expect: &str) {
    let table = FunctionTable::standard();
    match render(&table, template) {
        Ok(out) => assert_eq!(out, expect, "template {template:?}"),
        Err(err) => panic!("template {template:?} failed: {err}"),
    }
}

fn runerr(template: &str, expect: &str) {
    let table = FunctionTable::standard();
    match render(&table, template) {
        Ok(out) => panic!("template {template:?} rendered {out:?}, expected an error"),
        Err(err) => assert!(
            err.to_string().ends_with(expect),
            "expected error ending {expect:?}, got {err}"
        ),
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

#[test]
fn add() {
    runt("{{ 3 | add 1 2}}", "6");
    runt("{{ 3 | add 1 2.5}}", "6.5");
}

#[test]
fn biggest() {
    runt("{{ biggest 1 2 3 345 5 6 7}}", "345");
    runt("{{ max 345}}", "345");
    runt("{{ biggest 1 2 3.0 345.7 5 6 7}}", "345.7");
}

#[test]
fn min() {
    runt("{{ min 1 2 3 345 5 6 7}}", "1");
    runt("{{ min 345}}", "345");
    runt("{{ min 1.2 2 3 345 5 6 7}}", "1.2");
    runt("{{ min 1.2 2 3 345.3 5 6 7}}", "1.2");
}

#[test]
fn mul() {
    runt("{{ mul 1 2 3 }}", "6");
    runt("{{ mul 1 2.5 3 }}", "7.5");
    runt("{{ mul 1.0 2.5 3.0 }}", "7.5");
    runt("{{ mul 5.4 }}", "5.4");
    runt("{{ mul 5 }}", "5");
    runerr("{{ mul \"bob\" }}", "mul[arg0]: cannot convert bob to float64 or int64");
}

#[test]
fn sub_div_mod() {
    runt("{{ sub 10 3 }}", "7");
    runt("{{ 3 | sub 10 }}", "7");
    runt("{{ div 6 3 }}", "2");
    runt("{{ div 1 4 }}", "0.25");
    runt("{{ div 1 0 }}", "+Inf");
    runt("{{ mod 7 3 }}", "1");
    runt("{{ mod 7.5 2 }}", "1.5");
    runerr("{{ mod 7 0 }}", "mod: integer division by zero");
}

#[test]
fn rounding() {
    runt("{{ ceil 1.1 }}", "2");
    runt("{{ floor 1.9 }}", "1");
    runt("{{ round 2.5 }}", "3");
    runt("{{ add1 41 }}", "42");
}

#[test]
fn string_operands() {
    runt("{{ add \"1\" \"2\" }}", "3");
    runt("{{ add \"1\" \"2.5\" }}", "3.5");
    runt("{{ max \"10\" 9.5 }}", "10");
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn conversions() {
    runt("{{ int \"12\" }}", "12");
    runt("{{ int64 3.99 }}", "3");
    runt("{{ atoi \"-4\" }}", "-4");
    runt("{{ float64 2 }}", "2");
    runt("{{ double \"2.5\" }}", "2.5");
    runt("{{ number \"2\" }} {{ number \"2.0\" }}", "2 2");
    runerr("{{ atoi 4 }}", "type mismatch: expected string, got int64");
}

#[test]
fn conversions_reject_unrepresentable_floats() {
    runerr("{{ int \"1e300\" }}", "int: 1e+300 is out of range for int64");
    runerr("{{ int64 (inf 1) }}", "int64: +Inf is out of range for int64");
    runerr("{{ int (sqrt -1) }}", "int: NaN is out of range for int64");
    runerr("{{ ceil 1e300 }}", "ceil: 1e+300 is out of range for int64");
    runerr("{{ round (sqrt -1) }}", "round: NaN is out of range for int64");
}

// =============================================================================
// Math
// =============================================================================

#[test]
fn cos_pi() {
    runt("{{ pi | cos }}", "-1");
}

#[test]
fn math_wrappers() {
    runt("{{ sqrt 16 }}", "4");
    runt("{{ pow 2 10 }}", "1024");
    runt("{{ hypot 3 4 }}", "5");
    runt("{{ 90 | radians | sin }}", "1");
    runt("{{ pow10 6 }}", "1e+06");
    runt("{{ inf 1 }} {{ inf -1 }}", "+Inf -Inf");
    runt("{{ signbit -0.0 }}", "true");
    runt("{{ ilogb 0.25 }}", "-2");
    runt("{{ log -1 }}", "NaN");
    runt("{{ exp 0 }}", "1");
}

#[test]
fn small_and_large_floats() {
    runt("{{ div 3 20000000 }}", "1.5e-07");
    runt("{{ mul 1234567 1.0 }}", "1.234567e+06");
    runt("{{ mul 123456 1.0 }}", "123456");
}

// =============================================================================
// Template Syntax
// =============================================================================

#[test]
fn text_around_actions() {
    runt("total: {{ add 1 2 }} items, {{ mul 2 2.5 }} kg", "total: 3 items, 5 kg");
}

#[test]
fn trim_markers() {
    runt("a\n  {{- add 1 1 -}}\n  b", "a2b");
}

#[test]
fn nested_pipelines() {
    runt("{{ mul (add 1 2) (sub 5 1) }}", "12");
    runt("{{ (add 1 2) | mul 2 }}", "6");
}

#[test]
fn unknown_function_is_an_error() {
    runerr("{{ frob 1 }}", "function \"frob\" not defined");
}

#[test]
fn restricted_table() {
    let table = FunctionTable::with_config(TableConfig::arithmetic_only());
    assert_eq!(render(&table, "{{ add 1 2 }}").unwrap(), "3");
    assert!(render(&table, "{{ pi }}").is_err());
}
