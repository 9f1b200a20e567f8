//! Template functions for tplmath.
//!
//! This crate provides the functions a template host registers:
//! - Arithmetic with integer-to-float promotion (`add`, `sub`, `mul`, `div`,
//!   `mod`, `max`, `min`, `add1`, `ceil`, `floor`, `round`)
//! - Conversions (`int`, `int64`, `atoi`, `float64`, `double`, `number`)
//! - Math wrappers (`sin`, `log`, `erf`, `pow`, ...) and the `pi`/`e` constants
//! - [`FunctionTable`] - Name-to-function registration, configured by [`TableConfig`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod config;
pub mod convert;
mod fold;
pub mod math;
pub mod table;

pub use arithmetic::{add, add1, ceil, div, floor, max, min, modulo, mul, round, sub};
pub use config::TableConfig;
pub use convert::atoi;
pub use table::{FunctionTable, NativeFn, NativeFnPtr};
