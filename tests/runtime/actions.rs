//! Integration tests for action evaluation
//!
//! Tests the parser and evaluator through the public API.

use tplmath_foundation::{ErrorKind, Value};
use tplmath_runtime::{Evaluator, Operand, eval_input, parse_action};
use tplmath_stdlib::FunctionTable;

#[test]
fn literals_keep_template_types() {
    let table = FunctionTable::standard();
    let evaluator = Evaluator::new(&table);
    assert_eq!(evaluator.eval("3").unwrap(), Value::I64(3));
    assert_eq!(evaluator.eval("2.5").unwrap(), Value::F64(2.5));
    assert_eq!(evaluator.eval("\"5\"").unwrap(), Value::from("5"));
    assert_eq!(evaluator.eval("true").unwrap(), Value::Bool(true));
    assert_eq!(evaluator.eval("nil").unwrap(), Value::Nil);
}

#[test]
fn pipeline_feeds_last_argument() {
    let table = FunctionTable::standard();
    let evaluator = Evaluator::new(&table);
    assert_eq!(evaluator.eval("2 | sub 10").unwrap(), Value::I64(8));
    assert_eq!(evaluator.eval("2 | div 1").unwrap(), Value::F64(0.5));
    assert_eq!(evaluator.eval("16 | sqrt | add1").unwrap(), Value::F64(5.0));
}

#[test]
fn parsed_structure() {
    let pipeline = parse_action("add 1 (mul 2 3) | max 4").unwrap();
    assert_eq!(pipeline.commands.len(), 2);
    let first = &pipeline.commands[0];
    assert_eq!(first.operands.len(), 3);
    assert!(matches!(first.operands[2], Operand::Pipeline(_)));
}

#[test]
fn parse_errors_carry_columns() {
    let err = parse_action("add 1 )").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::ParseError {
            message: "unexpected right paren".to_string(),
            column: 7,
        }
    );
}

#[test]
fn eval_input_switches_on_delimiters() {
    let table = FunctionTable::standard();
    assert_eq!(eval_input(&table, "add 1 2.5").unwrap(), "3.5");
    assert_eq!(eval_input(&table, "= {{ add 1 2.5 }}").unwrap(), "= 3.5");
    assert_eq!(eval_input(&table, "nil").unwrap(), "<no value>");
}
