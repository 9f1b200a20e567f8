//! Action parsing and evaluation.
//!
//! An action is the body of a `{{ ... }}` block: one or more commands joined
//! by `|`. Each command is a function name followed by arguments, or a single
//! literal. A pipeline passes the previous command's result as the final
//! argument of the next command, so `3 | add 1 2` calls `add 1 2 3`.

use tplmath_foundation::{Error, Result, Value};
use tplmath_stdlib::FunctionTable;

use crate::lexer::{Lexer, Token, TokenKind};

/// Commands joined by `|`.
#[derive(Clone, Debug, PartialEq)]
pub struct Pipeline {
    /// Commands in evaluation order. Never empty.
    pub commands: Vec<Command>,
}

/// A single command: a function call or a lone operand.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    /// The command's operands. Never empty.
    pub operands: Vec<Operand>,
    /// Column where the command starts.
    pub column: usize,
}

/// One word of a command.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// A literal value.
    Literal(Value),
    /// A function name; called with no arguments unless it heads a command.
    Function {
        /// Registered name.
        name: String,
        /// Column of the name.
        column: usize,
    },
    /// A parenthesized sub-pipeline.
    Pipeline(Pipeline),
}

/// Parses an action body into a pipeline.
///
/// # Errors
///
/// Returns a parse error for malformed input.
pub fn parse_action(source: &str) -> Result<Pipeline> {
    let tokens = Lexer::tokenize(source)?;
    let mut parser = Parser { tokens, pos: 0 };
    let pipeline = parser.parse_pipeline()?;
    let token = parser.peek();
    match token.kind {
        TokenKind::Eof => Ok(pipeline),
        TokenKind::RParen => Err(Error::parse("unexpected right paren", token.column)),
        _ => Err(Error::parse("unexpected token", token.column)),
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        // The token stream always ends with Eof, and the parser never advances past it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn bump(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn parse_pipeline(&mut self) -> Result<Pipeline> {
        let mut commands = vec![self.parse_command()?];
        while self.peek().kind == TokenKind::Pipe {
            self.bump();
            commands.push(self.parse_command()?);
        }
        Ok(Pipeline { commands })
    }

    fn parse_command(&mut self) -> Result<Command> {
        let column = self.peek().column;
        let mut operands = Vec::new();
        while !matches!(
            self.peek().kind,
            TokenKind::Pipe | TokenKind::RParen | TokenKind::Eof
        ) {
            operands.push(self.parse_operand()?);
        }
        if operands.is_empty() {
            return Err(Error::parse("missing value for command", column));
        }
        Ok(Command { operands, column })
    }

    fn parse_operand(&mut self) -> Result<Operand> {
        let token = self.bump();
        Ok(match token.kind {
            TokenKind::Int(n) => Operand::Literal(Value::I64(n)),
            TokenKind::Float(n) => Operand::Literal(Value::F64(n)),
            TokenKind::String(s) => Operand::Literal(Value::from(s)),
            TokenKind::Ident(name) => match name.as_str() {
                "true" => Operand::Literal(Value::Bool(true)),
                "false" => Operand::Literal(Value::Bool(false)),
                "nil" => Operand::Literal(Value::Nil),
                _ => Operand::Function {
                    name,
                    column: token.column,
                },
            },
            TokenKind::LParen => {
                let inner = self.parse_pipeline()?;
                let close = self.bump();
                if close.kind != TokenKind::RParen {
                    return Err(Error::parse("unclosed left paren", token.column));
                }
                Operand::Pipeline(inner)
            }
            TokenKind::Pipe | TokenKind::RParen | TokenKind::Eof => {
                return Err(Error::parse("unexpected token", token.column));
            }
        })
    }
}

/// Evaluates actions against a function table.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator<'t> {
    table: &'t FunctionTable,
}

impl<'t> Evaluator<'t> {
    /// Creates an evaluator that resolves names in `table`.
    #[must_use]
    pub const fn new(table: &'t FunctionTable) -> Self {
        Self { table }
    }

    /// Parses and evaluates an action body.
    ///
    /// # Errors
    ///
    /// Returns a parse error, or the first error raised by a function.
    pub fn eval(&self, source: &str) -> Result<Value> {
        self.eval_pipeline(&parse_action(source)?)
    }

    /// Evaluates a parsed pipeline.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a command.
    pub fn eval_pipeline(&self, pipeline: &Pipeline) -> Result<Value> {
        let mut piped = None;
        for command in &pipeline.commands {
            piped = Some(self.eval_command(command, piped.take())?);
        }
        Ok(piped.unwrap_or(Value::Nil))
    }

    fn eval_command(&self, command: &Command, piped: Option<Value>) -> Result<Value> {
        let (head, rest) = match command.operands.as_slice() {
            [head, rest @ ..] => (head, rest),
            [] => return Err(Error::parse("missing value for command", command.column)),
        };

        if let Operand::Function { name, .. } = head {
            let mut args = rest
                .iter()
                .map(|operand| self.eval_operand(operand))
                .collect::<Result<Vec<_>>>()?;
            args.extend(piped);
            return self.table.call(name, &args);
        }

        if !rest.is_empty() || piped.is_some() {
            return Err(Error::parse(
                "can't give argument to non-function",
                command.column,
            ));
        }
        self.eval_operand(head)
    }

    fn eval_operand(&self, operand: &Operand) -> Result<Value> {
        match operand {
            Operand::Literal(value) => Ok(value.clone()),
            Operand::Function { name, .. } => self.table.call(name, &[]),
            Operand::Pipeline(pipeline) => self.eval_pipeline(pipeline),
        }
    }
}
