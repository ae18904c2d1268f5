use std::fmt;

use crate::token::{Span, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Quoted name with no closing quote before end of input.
    UnterminatedString,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => {
                write!(f, "unterminated quoted name")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", .span.line, .span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Candidate cursor state after a token, applied only on consume.
#[derive(Clone, Copy)]
struct Mark {
    pos: usize,
    line: usize,
    col: usize,
}

impl Mark {
    const fn step(&mut self, byte: u8) {
        if byte == b'\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        self.pos += 1;
    }
}

/// Forward-only read position over a raw input buffer.
///
/// The same grammar backs both retrieval modes: [`Cursor::peek`]
/// computes the next token without moving, [`Cursor::consume`]
/// returns that token and moves past its source bytes.
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Cursor<'a> {
    /// Start a cursor at the beginning of `input`. End of buffer is
    /// treated as end of input; no terminator byte is required.
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// General tokenization entry point. When `advance` is true the
    /// cursor moves past the token's source bytes; otherwise the
    /// cursor is untouched.
    ///
    /// # Errors
    ///
    /// Returns `LexError` on an unterminated quoted name.
    pub fn next_token(&mut self, advance: bool) -> Result<Token, LexError> {
        if advance { self.consume() } else { self.peek() }
    }

    /// Return the next token without moving the cursor. Any number of
    /// consecutive peeks at the same position return equal tokens.
    ///
    /// # Errors
    ///
    /// Returns `LexError` on an unterminated quoted name.
    pub fn peek(&self) -> Result<Token, LexError> {
        Ok(self.scan()?.0)
    }

    /// Return the next token and move the cursor past it. At end of
    /// input this keeps returning [`TokenKind::End`] without moving.
    ///
    /// # Errors
    ///
    /// Returns `LexError` on an unterminated quoted name.
    pub fn consume(&mut self) -> Result<Token, LexError> {
        let (token, end) = self.scan()?;
        self.pos = end.pos;
        self.line = end.line;
        self.col = end.col;
        Ok(token)
    }

    /// Scan one token starting at the current position, returning it
    /// together with the cursor state just past it. Does not mutate.
    fn scan(&self) -> Result<(Token, Mark), LexError> {
        let mut mark = Mark {
            pos: self.pos,
            line: self.line,
            col: self.col,
        };

        // Spaces separate tokens but are not tokens themselves.
        while self.input.get(mark.pos) == Some(&b' ') {
            mark.step(b' ');
        }

        let span = Span {
            line: mark.line,
            column: mark.col,
        };

        let Some(&byte) = self.input.get(mark.pos) else {
            let token = Token {
                kind: TokenKind::End,
                text: None,
                span,
            };
            return Ok((token, mark));
        };

        let kind = match byte {
            b'\n' => TokenKind::Newline,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'"' => return self.scan_quoted(mark, span),
            _ => return Ok(self.scan_bare(mark, span)),
        };

        mark.step(byte);
        let token = Token {
            kind,
            text: None,
            span,
        };
        Ok((token, mark))
    }

    /// Quoted name: everything up to the first unescaped closing
    /// quote, kept verbatim. A backslash never closes the name and
    /// shields the byte after it; neither byte is translated.
    fn scan_quoted(&self, mut mark: Mark, span: Span) -> Result<(Token, Mark), LexError> {
        mark.step(b'"');
        let start = mark.pos;

        loop {
            match self.input.get(mark.pos) {
                None => {
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedString,
                        span,
                    });
                }
                Some(b'"') => break,
                Some(b'\\') => {
                    mark.step(b'\\');
                    if let Some(&escaped) = self.input.get(mark.pos) {
                        mark.step(escaped);
                    }
                }
                Some(&byte) => mark.step(byte),
            }
        }

        let text = self.input[start..mark.pos].to_vec();
        mark.step(b'"');

        let token = Token {
            kind: TokenKind::Name,
            text: Some(text),
            span,
        };
        Ok((token, mark))
    }

    /// Bare name: scanned until end of input, space, newline, or a
    /// bracket byte. Never empty -- every terminator byte is handled
    /// before falling through here.
    fn scan_bare(&self, mut mark: Mark, span: Span) -> (Token, Mark) {
        let start = mark.pos;

        while let Some(&byte) = self.input.get(mark.pos) {
            match byte {
                b' ' | b'\n' | b'(' | b')' | b'{' | b'}' => break,
                _ => mark.step(byte),
            }
        }

        let text = self.input[start..mark.pos].to_vec();
        let token = Token {
            kind: TokenKind::Name,
            text: Some(text),
            span,
        };
        (token, mark)
    }
}
