//! Template rendering.
//!
//! Text outside `{{ ... }}` is copied verbatim. Each action is evaluated and
//! replaced by its formatted result. `{{- ` trims whitespace before the
//! action and ` -}}` trims whitespace after it; `{{/* ... */}}` is a comment.

use tplmath_foundation::{Error, Result, Value};
use tplmath_stdlib::FunctionTable;
use tracing::{debug, trace};

use crate::action::Evaluator;

/// Printed in place of an action that evaluates to nil.
pub const NO_VALUE: &str = "<no value>";

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Renders `text`, evaluating every action against `table`.
///
/// # Errors
///
/// Returns the first parse or evaluation error; nothing is rendered then.
pub fn render(table: &FunctionTable, text: &str) -> Result<String> {
    let evaluator = Evaluator::new(table);
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(OPEN) {
        let (before, after_open) = rest.split_at(open);
        let mut body = &after_open[OPEN.len()..];

        if let Some(trimmed) = strip_left_marker(body) {
            out.push_str(before.trim_end());
            body = trimmed;
        } else {
            out.push_str(before);
        }

        let offset = text.len() - after_open.len();
        let Some(close) = find_close(body) else {
            return Err(Error::parse("unclosed action", column_at(text, offset)));
        };
        let (action, after_close) = body.split_at(close);
        rest = &after_close[CLOSE.len()..];

        let action = match strip_right_marker(action) {
            Some(trimmed) => {
                rest = rest.trim_start();
                trimmed
            }
            None => action,
        };

        if is_comment(action) {
            continue;
        }

        trace!(action = action.trim(), "evaluating action");
        let value = evaluator
            .eval(action)
            .inspect_err(|err| debug!(action = action.trim(), error = %err, "action failed"))?;
        write_value(&mut out, &value);
    }

    out.push_str(rest);
    Ok(out)
}

fn write_value(out: &mut String, value: &Value) {
    if value.is_nil() {
        out.push_str(NO_VALUE);
    } else {
        out.push_str(&value.to_string());
    }
}

// A trim marker needs whitespace between the dash and the action, so `{{-3}}`
// is the number -3.
fn strip_left_marker(body: &str) -> Option<&str> {
    let after = body.strip_prefix('-')?;
    after
        .starts_with(|c: char| c.is_ascii_whitespace())
        .then_some(after)
}

fn strip_right_marker(action: &str) -> Option<&str> {
    let before = action.strip_suffix('-')?;
    before
        .ends_with(|c: char| c.is_ascii_whitespace())
        .then_some(before)
}

fn is_comment(action: &str) -> bool {
    let action = action.trim();
    action.starts_with("/*") && action.ends_with("*/") && action.len() >= 4
}

/// Byte index of the closing delimiter, skipping over string literals.
fn find_close(body: &str) -> Option<usize> {
    let mut quote = None;
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '`' => quote = Some(c),
            None if body[i..].starts_with(CLOSE) => return Some(i),
            None => {}
        }
    }
    None
}

/// 1-based column of a byte offset within its line.
fn column_at(text: &str, offset: usize) -> usize {
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    text[line_start..offset].chars().count() + 1
}
