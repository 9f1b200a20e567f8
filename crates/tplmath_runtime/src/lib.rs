//! Host runtime for tplmath.
//!
//! This crate provides:
//! - [`Evaluator`] - Parses and evaluates action bodies such as `3 | add 1 2`
//! - [`render`] - Expands `{{ ... }}` actions in template text
//! - [`Repl`] - Interactive read-eval-print loop
//! - The `tplmath` command-line binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod editor;
pub mod lexer;
pub mod repl;
pub mod template;

pub use action::{Command, Evaluator, Operand, Pipeline, parse_action};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Repl, eval_input, render_file};
pub use template::{NO_VALUE, render};
