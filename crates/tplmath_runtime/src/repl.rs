//! The interactive REPL.
//!
//! A line containing `{{` is rendered as a template; anything else is
//! evaluated as a single action and its value printed.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tplmath_foundation::{Error, ErrorKind, Result};
use tplmath_stdlib::FunctionTable;

use crate::action::Evaluator;
use crate::editor::{LineEditor, ReadResult, RustylineEditor, is_complete};
use crate::template::{NO_VALUE, render};

/// Evaluates one line of input: a template if it contains `{{`, otherwise a
/// single action whose value is formatted.
///
/// # Errors
///
/// Returns a parse or evaluation error.
pub fn eval_input(table: &FunctionTable, input: &str) -> Result<String> {
    if input.contains("{{") {
        return render(table, input);
    }
    let value = Evaluator::new(table).eval(input)?;
    Ok(if value.is_nil() {
        NO_VALUE.to_string()
    } else {
        value.to_string()
    })
}

/// Renders a template file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or rendering fails.
pub fn render_file(table: &FunctionTable, path: &Path) -> Result<String> {
    let source = fs::read_to_string(path).map_err(|e| {
        Error::new(ErrorKind::Io(format!("failed to read {}: {e}", path.display())))
    })?;
    render(table, &source)
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Functions available to actions.
    table: FunctionTable,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for multi-line input).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and the standard function table.
    pub fn with_editor(editor: E) -> Self {
        let mut repl = Self {
            editor,
            table: FunctionTable::standard(),
            show_banner: true,
            prompt: ">> ".to_string(),
            continuation_prompt: ".. ".to_string(),
        };
        repl.sync_completions();
        repl
    }

    /// Replaces the function table.
    #[must_use]
    pub fn with_table(mut self, table: FunctionTable) -> Self {
        self.table = table;
        self.sync_completions();
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    fn sync_completions(&mut self) {
        let names = self.table.names().into_iter().map(String::from).collect();
        self.editor.set_completions(names);
    }

    /// Runs the REPL loop until end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while let Some(input) = self.read_input()? {
            if input.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&input);

            match self.eval(&input) {
                Ok(output) => println!("{output}"),
                Err(e) => self.print_error(&e),
            }
        }

        println!();
        Ok(())
    }

    /// Reads a potentially multi-line input. Returns `None` at end of input.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let prompt = if first_line {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if !first_line {
                        input.push('\n');
                    }
                    input.push_str(&line);

                    if is_complete(&input) {
                        return Ok(Some(input));
                    }
                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof if first_line => return Ok(None),
                ReadResult::Eof => {
                    return Err(Error::new(ErrorKind::Io(
                        "unexpected end of input in multi-line action".to_string(),
                    )));
                }
            }
        }
    }

    /// Evaluates one input and returns the text to print.
    ///
    /// # Errors
    ///
    /// Returns a parse or evaluation error.
    pub fn eval(&self, input: &str) -> Result<String> {
        eval_input(&self.table, input)
    }

    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("tplmath v{}", env!("CARGO_PKG_VERSION"));
        println!("Type an action (add 1 2.5) or a template ({{{{ pi | cos }}}}). Ctrl+D exits.\n");
        let _ = io::stdout().flush();
    }
}
