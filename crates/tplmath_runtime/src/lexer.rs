//! Lexer for action bodies.
//!
//! The lexer converts the text between `{{` and `}}` into a stream of tokens.

use std::iter::Peekable;
use std::str::Chars;

use tplmath_foundation::{Error, Result};

/// The kind of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Integer literal.
    Int(i64),
    /// Float literal, or an integer literal too large for `i64`.
    Float(f64),
    /// Quoted or raw string literal, with escapes resolved.
    String(String),
    /// Function name or keyword (`true`, `false`, `nil`).
    Ident(String),
    /// `|`
    Pipe,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input.
    Eof,
}

/// A token with its 1-based starting column.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What was scanned.
    pub kind: TokenKind,
    /// Column of the first character.
    pub column: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, column: usize) -> Self {
        Self { kind, column }
    }
}

/// Lexer for action text.
pub struct Lexer<'src> {
    chars: Peekable<Chars<'src>>,
    /// Column of the next character (1-based).
    column: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: source.chars().peekable(),
            column: 1,
        }
    }

    /// Tokenizes all source, ending with an [`TokenKind::Eof`] token.
    ///
    /// # Errors
    ///
    /// Returns a parse error for an unexpected character, an unterminated
    /// string, or a malformed number.
    pub fn tokenize(source: &str) -> Result<Vec<Token>> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    /// Returns the next token from the source.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the next token is malformed.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let column = self.column;
        let Some(c) = self.chars.peek().copied() else {
            return Ok(Token::new(TokenKind::Eof, column));
        };

        let kind = match c {
            '|' => {
                self.advance();
                TokenKind::Pipe
            }
            '(' => {
                self.advance();
                TokenKind::LParen
            }
            ')' => {
                self.advance();
                TokenKind::RParen
            }
            '"' => self.scan_string(column)?,
            '`' => self.scan_raw_string(column)?,
            c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                self.scan_number(column)?
            }
            c if is_ident_start(c) => self.scan_ident(),
            c => return Err(Error::parse(format!("unexpected character {c:?}"), column)),
        };

        Ok(Token::new(kind, column))
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.column += 1;
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }

    fn take_while(&mut self, text: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(&c) = self.chars.peek() {
            if !pred(c) {
                break;
            }
            text.push(c);
            self.advance();
        }
    }

    fn scan_string(&mut self, column: usize) -> Result<TokenKind> {
        self.advance();
        let mut text = String::new();
        loop {
            match self.advance() {
                None => return Err(Error::parse("unterminated quoted string", column)),
                Some('"') => return Ok(TokenKind::String(text)),
                Some('\\') => {
                    let escaped = match self.advance() {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some('0') => '\0',
                        Some(c @ ('"' | '\\')) => c,
                        Some(c) => {
                            return Err(Error::parse(
                                format!("unknown escape sequence \\{c}"),
                                self.column - 1,
                            ));
                        }
                        None => return Err(Error::parse("unterminated quoted string", column)),
                    };
                    text.push(escaped);
                }
                Some(c) => text.push(c),
            }
        }
    }

    fn scan_raw_string(&mut self, column: usize) -> Result<TokenKind> {
        self.advance();
        let mut text = String::new();
        loop {
            match self.advance() {
                None => return Err(Error::parse("unterminated raw string", column)),
                Some('`') => return Ok(TokenKind::String(text)),
                Some(c) => text.push(c),
            }
        }
    }

    fn scan_number(&mut self, column: usize) -> Result<TokenKind> {
        let mut text = String::new();
        if let Some(sign @ ('-' | '+')) = self.chars.peek().copied() {
            text.push(sign);
            self.advance();
        }
        self.take_while(&mut text, |c| c.is_ascii_digit());
        if self.chars.peek() == Some(&'.') {
            text.push('.');
            self.advance();
            self.take_while(&mut text, |c| c.is_ascii_digit());
        }
        if let Some(e @ ('e' | 'E')) = self.chars.peek().copied() {
            text.push(e);
            self.advance();
            if let Some(sign @ ('-' | '+')) = self.chars.peek().copied() {
                text.push(sign);
                self.advance();
            }
            self.take_while(&mut text, |c| c.is_ascii_digit());
        }

        // A number runs into a following letter, as in `3abc`.
        if self.chars.peek().is_some_and(|&c| is_ident_char(c)) {
            self.take_while(&mut text, is_ident_char);
            return Err(Error::parse(format!("bad number syntax: {text:?}"), column));
        }

        let digits = text.strip_prefix('+').unwrap_or(&text);
        if let Ok(n) = digits.parse::<i64>() {
            return Ok(TokenKind::Int(n));
        }
        match digits.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(TokenKind::Float(n)),
            _ => Err(Error::parse(format!("bad number syntax: {text:?}"), column)),
        }
    }

    fn scan_ident(&mut self) -> TokenKind {
        let mut text = String::new();
        self.take_while(&mut text, is_ident_char);
        TokenKind::Ident(text)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
