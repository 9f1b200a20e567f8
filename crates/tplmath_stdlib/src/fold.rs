//! Variadic folds with integer-to-float promotion.
//!
//! `add`, `mul`, `max` and `min` all share one policy: integers and floats are
//! accumulated separately, and the result is promoted to a float only if a
//! float operand took part. Integers therefore stay exact for as long as
//! possible, and the integer partial result is widened exactly once at the end.

use tplmath_foundation::{Number, Result, Value, to_number};

/// How a variadic primitive combines operands of each kind.
pub(crate) struct Fold {
    /// Template function name, used to tag operand errors.
    pub name: &'static str,
    /// Combines two integers.
    pub int_step: fn(i64, i64) -> i64,
    /// Combines two floats; also merges the widened integer partial result.
    pub float_step: fn(f64, f64) -> f64,
}

/// Running state of a fold.
///
/// The first operand of each kind seeds that kind's accumulator, so a single
/// operand folds to itself and no identity or sentinel value can leak into a
/// result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Accumulator {
    /// Only integers seen so far.
    Int(i64),
    /// Only floats seen so far.
    Float(f64),
    /// Both kinds seen; the result will be a float.
    Mixed {
        /// Integer partial result.
        int: i64,
        /// Float partial result.
        float: f64,
    },
}

impl Accumulator {
    /// Starts a fold from its first operand.
    pub(crate) const fn seed(first: Number) -> Self {
        match first {
            Number::Int(n) => Self::Int(n),
            Number::Float(n) => Self::Float(n),
        }
    }

    /// Folds one more operand in.
    pub(crate) fn push(self, op: &Fold, operand: Number) -> Self {
        match (self, operand) {
            (Self::Int(acc), Number::Int(n)) => Self::Int((op.int_step)(acc, n)),
            (Self::Float(acc), Number::Float(n)) => Self::Float((op.float_step)(acc, n)),
            (Self::Int(int), Number::Float(float)) | (Self::Float(float), Number::Int(int)) => {
                Self::Mixed { int, float }
            }
            (Self::Mixed { int, float }, Number::Int(n)) => Self::Mixed {
                int: (op.int_step)(int, n),
                float,
            },
            (Self::Mixed { int, float }, Number::Float(n)) => Self::Mixed {
                int,
                float: (op.float_step)(float, n),
            },
        }
    }

    /// Produces the final number.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn finish(self, op: &Fold) -> Number {
        match self {
            Self::Int(n) => Number::Int(n),
            Self::Float(n) => Number::Float(n),
            Self::Mixed { int, float } => Number::Float((op.float_step)(float, int as f64)),
        }
    }
}

/// Coerces and folds `first` and `rest` left to right.
///
/// The first operand that fails coercion aborts the fold; its error is tagged
/// with the function name and the operand's index (`first` is index 0).
pub(crate) fn fold(op: &Fold, first: &Value, rest: &[Value]) -> Result<Number> {
    let mut acc = Accumulator::seed(coerce_operand(op, first, 0)?);
    for (offset, operand) in rest.iter().enumerate() {
        acc = acc.push(op, coerce_operand(op, operand, offset + 1)?);
    }
    Ok(acc.finish(op))
}

fn coerce_operand(op: &Fold, value: &Value, index: usize) -> Result<Number> {
    to_number(value).map_err(|err| err.at_operand(op.name, index))
}
