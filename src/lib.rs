//! tplmath - Numeric coercion and math functions for text templates
//!
//! This crate re-exports all layers of the tplmath system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: tplmath_runtime    - Action evaluator, template renderer, REPL, CLI
//! Layer 1: tplmath_stdlib     - Arithmetic, conversions, math, function table
//! Layer 0: tplmath_foundation - Value, Number, coercion, Error
//! ```

pub use tplmath_foundation as foundation;
pub use tplmath_runtime as runtime;
pub use tplmath_stdlib as stdlib;
