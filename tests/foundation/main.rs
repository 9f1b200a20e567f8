//! Integration tests for Layer 0: Foundation
//!
//! Tests for raw values, coercion into numbers, and error reporting.

mod coercion;
mod errors;
