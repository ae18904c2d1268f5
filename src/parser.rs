use std::fmt;

use crate::Error;
use crate::ast::Expr;
use crate::lexer::Cursor;
use crate::token::{Span, Token, TokenKind};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Expected `{` opening a braced scope.
    ExpectedOpenBrace { found: Option<String> },
    /// Expected `(` opening a grouped expression.
    ExpectedOpenParen { found: Option<String> },
    /// Expected `)` closing a grouped expression.
    ExpectedCloseParen { found: Option<String> },
    /// Expected a name token.
    ExpectedName { found: Option<String> },
    /// At least one expression term was required.
    ExpectedExpression,
    /// A braced-scope expression was not followed by a newline or `}`.
    ExpectedNewlineOrCloseBrace { found: Option<String> },
    /// A top-level expression was not followed by a newline or end of
    /// input.
    ExpectedNewlineOrEnd { found: Option<String> },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedOpenBrace { found: None } => {
                write!(f, "expected '{{'")
            }
            Self::ExpectedOpenBrace { found: Some(t) } => {
                write!(f, "expected '{{', got '{t}'")
            }
            Self::ExpectedOpenParen { found: None } => {
                write!(f, "expected '('")
            }
            Self::ExpectedOpenParen { found: Some(t) } => {
                write!(f, "expected '(', got '{t}'")
            }
            Self::ExpectedCloseParen { found: None } => {
                write!(f, "expected ')'")
            }
            Self::ExpectedCloseParen { found: Some(t) } => {
                write!(f, "expected ')', got '{t}'")
            }
            Self::ExpectedName { found: None } => {
                write!(f, "expected a name")
            }
            Self::ExpectedName { found: Some(t) } => {
                write!(f, "expected a name, got '{t}'")
            }
            Self::ExpectedExpression => {
                write!(f, "expected an expression")
            }
            Self::ExpectedNewlineOrCloseBrace { found: None } => {
                write!(f, "expected newline or '}}'")
            }
            Self::ExpectedNewlineOrCloseBrace { found: Some(t) } => {
                write!(f, "expected newline or '}}', got '{t}'")
            }
            Self::ExpectedNewlineOrEnd { found: None } => {
                write!(f, "expected newline or end of input")
            }
            Self::ExpectedNewlineOrEnd { found: Some(t) } => {
                write!(f, "expected newline or end of input, got '{t}'")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", .span.line, .span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Parse Paws source bytes into the program's top-level scope.
///
/// The whole input is the implicit top-level scope: no surrounding
/// braces, terminated by end of input. On success the result is
/// always an [`Expr::Scope`].
///
/// # Errors
///
/// Returns [`Error`] on the first lexical or syntactic violation; no
/// partial tree is produced.
pub fn parse(input: &[u8]) -> Result<Expr, Error> {
    Parser::new(input).parse()
}

struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    const fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    fn parse(mut self) -> Result<Expr, Error> {
        self.parse_scope(false)
    }

    /// Scope body: one or more newline-separated expressions. With
    /// `braces` the scope must open with `{` and close with `}`;
    /// otherwise it spans the whole input and closes at end of input.
    fn parse_scope(&mut self, braces: bool) -> Result<Expr, Error> {
        if braces {
            let token = self.cursor.consume()?;
            if token.kind != TokenKind::LBrace {
                return Err(ParseError {
                    kind: ParseErrorKind::ExpectedOpenBrace {
                        found: token.describe(),
                    },
                    span: token.span,
                }
                .into());
            }
        }

        let mut items = Vec::new();
        loop {
            items.push(self.parse_expr()?);

            let token = self.cursor.consume()?;
            match token.kind {
                TokenKind::Newline => {
                    // A run of blank lines is a single separator; the
                    // next expression is still mandatory.
                    while self.cursor.peek()?.kind == TokenKind::Newline {
                        self.cursor.consume()?;
                    }
                }
                TokenKind::RBrace if braces => break,
                TokenKind::End if !braces => break,
                _ => {
                    let found = token.describe();
                    let kind = if braces {
                        ParseErrorKind::ExpectedNewlineOrCloseBrace { found }
                    } else {
                        ParseErrorKind::ExpectedNewlineOrEnd { found }
                    };
                    return Err(ParseError {
                        kind,
                        span: token.span,
                    }
                    .into());
                }
            }
        }

        Ok(Expr::Scope { items })
    }

    /// One expression: a run of adjacent terms. A single term is
    /// returned as-is; two or more become a juxtaposition holding
    /// every term in parse order.
    fn parse_expr(&mut self) -> Result<Expr, Error> {
        let mut terms = Vec::new();

        // The terminating token is left for the caller.
        let stopped_at = loop {
            let token = self.cursor.peek()?;
            match token.kind {
                TokenKind::LBrace => terms.push(self.parse_scope(true)?),
                TokenKind::LParen => terms.push(self.parse_paren_expr()?),
                TokenKind::Name => terms.push(self.parse_name()?),
                _ => break token,
            }
        };

        match terms.len() {
            0 => Err(ParseError {
                kind: ParseErrorKind::ExpectedExpression,
                span: stopped_at.span,
            }
            .into()),
            1 => Ok(terms.remove(0)),
            _ => Ok(Expr::Juxtaposition { operands: terms }),
        }
    }

    /// Parenthesized expression. Parentheses only group; no node is
    /// materialized for them.
    fn parse_paren_expr(&mut self) -> Result<Expr, Error> {
        let token = self.cursor.consume()?;
        if token.kind != TokenKind::LParen {
            return Err(ParseError {
                kind: ParseErrorKind::ExpectedOpenParen {
                    found: token.describe(),
                },
                span: token.span,
            }
            .into());
        }

        let inner = self.parse_expr()?;

        let token = self.cursor.consume()?;
        if token.kind != TokenKind::RParen {
            return Err(ParseError {
                kind: ParseErrorKind::ExpectedCloseParen {
                    found: token.describe(),
                },
                span: token.span,
            }
            .into());
        }

        Ok(inner)
    }

    fn parse_name(&mut self) -> Result<Expr, Error> {
        match self.cursor.consume()? {
            Token {
                kind: TokenKind::Name,
                text: Some(text),
                ..
            } => Ok(Expr::Name { text }),
            token => Err(ParseError {
                kind: ParseErrorKind::ExpectedName {
                    found: token.describe(),
                },
                span: token.span,
            }
            .into()),
        }
    }
}
