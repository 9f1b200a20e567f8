//! Error types for tplmath.
//!
//! Uses `thiserror` for the error kinds. An [`Error`] pairs a kind with an
//! optional [`CallSite`] naming the template function and operand that failed.

use std::fmt;

use thiserror::Error;

use crate::coerce::Target;
use crate::format::format_float;
use crate::types::{Arity, Type};

/// The main error type for tplmath operations.
#[derive(Debug)]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Where the error occurred, if known.
    pub site: Option<CallSite>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, site: None }
    }

    /// Attaches a call site to this error.
    ///
    /// The first call site wins: an error already tagged by an inner
    /// function keeps its original location.
    #[must_use]
    pub fn with_site(mut self, site: CallSite) -> Self {
        if self.site.is_none() {
            self.site = Some(site);
        }
        self
    }

    /// Tags this error with a function name and no operand position.
    #[must_use]
    pub fn in_function(self, function: &'static str) -> Self {
        self.with_site(CallSite::function(function))
    }

    /// Tags this error with a function name and operand index.
    #[must_use]
    pub fn at_operand(self, function: &'static str, index: usize) -> Self {
        self.with_site(CallSite::operand(function, index))
    }

    /// Creates a not-numeric error for a rendered value.
    #[must_use]
    pub fn not_numeric(value: impl Into<String>, target: Target) -> Self {
        Self::new(ErrorKind::NotNumeric {
            value: value.into(),
            target,
        })
    }

    /// Creates an overflow error for an unsigned value outside the `i64` range.
    #[must_use]
    pub fn overflow(value: u64) -> Self {
        Self::new(ErrorKind::Overflow(value))
    }

    /// Creates an out-of-range error for a float with no `i64` equivalent.
    #[must_use]
    pub fn out_of_range(value: f64) -> Self {
        Self::new(ErrorKind::OutOfRange(value))
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(expected: Arity, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { expected, actual })
    }

    /// Creates an unknown function error.
    #[must_use]
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownFunction(name.into()))
    }

    /// Creates a parse error at a 1-indexed column.
    #[must_use]
    pub fn parse(message: impl Into<String>, column: usize) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            column,
        })
    }

    /// Returns true if the error came from operand coercion.
    #[must_use]
    pub const fn is_coercion(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::NotNumeric { .. } | ErrorKind::Overflow(_) | ErrorKind::OutOfRange(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(site) = &self.site {
            write!(f, "{site}: ")?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// Value has no numeric interpretation.
    #[error("cannot convert {value} to {target}")]
    NotNumeric {
        /// The offending value, rendered for display.
        value: String,
        /// What the value was being converted to.
        target: Target,
    },

    /// Unsigned value is too large for a signed 64-bit integer.
    #[error("{0} is too big")]
    Overflow(u64),

    /// Float is NaN, infinite, or outside the `i64` range.
    #[error("{} is out of range for int64", format_float(*.0))]
    OutOfRange(f64),

    /// Operand has the wrong type for a function that does not coerce.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// Integer remainder by zero.
    #[error("integer division by zero")]
    DivisionByZero,

    /// Wrong number of arguments to a function.
    #[error("wrong number of arguments: expected {expected}, got {actual}")]
    ArityMismatch {
        /// The arity the function accepts.
        expected: Arity,
        /// Actual number of arguments.
        actual: usize,
    },

    /// No function registered under this name.
    #[error("function {0:?} not defined")]
    UnknownFunction(String),

    /// Malformed action or template text.
    #[error("parse error at column {column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Column number (1-indexed).
        column: usize,
    },

    /// Reading input failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Where an error occurred: a template function and, for multi-operand
/// functions, which operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Template function name.
    pub function: &'static str,
    /// Zero-based operand index.
    pub operand: Option<usize>,
}

impl CallSite {
    /// A call site with no operand position.
    #[must_use]
    pub const fn function(function: &'static str) -> Self {
        Self {
            function,
            operand: None,
        }
    }

    /// A call site for operand `index` of `function`.
    #[must_use]
    pub const fn operand(function: &'static str, index: usize) -> Self {
        Self {
            function,
            operand: Some(index),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand {
            Some(index) => write!(f, "{}[arg{index}]", self.function),
            None => write!(f, "{}", self.function),
        }
    }
}
