//! Core types and numeric coercion for tplmath.
//!
//! This crate provides:
//! - [`Value`] - A raw operand as handed over by a template host
//! - [`Number`] - The coerced form of an operand (`Int` or `Float`)
//! - [`Type`] and [`Arity`] - Descriptors used in diagnostics and dispatch
//! - [`Error`] - Error kinds with call-site context
//! - [`coerce`] - Conversion of any [`Value`] into a [`Number`], `i64`, or `f64`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coerce;
pub mod error;
pub mod format;
pub mod number;
pub mod types;
pub mod value;

pub use coerce::{Target, to_float64, to_int, to_int64, to_number};
pub use error::{CallSite, Error, ErrorKind};
pub use number::Number;
pub use types::{Arity, Type};
pub use value::Value;

/// Result type alias using the tplmath [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
