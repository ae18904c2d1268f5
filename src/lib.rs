//! Paws lexer, parser, and formatter.
//!
//! The front end of the Paws language: a cursor-based tokenizer and a
//! recursive-descent parser that turn raw source bytes into an
//! expression tree of scopes, juxtapositions, and names, plus a
//! formatter that prints a tree back as canonical source.
//!
//! A program is a top-level scope of newline-separated expressions.
//! Adjacent expressions form an implicit application (juxtaposition),
//! `{ }` opens a nested scope, `( )` groups, and names are bare
//! identifiers or `"`-quoted literals.
//!
//! # Quick start
//!
//! ## Parse a program
//!
//! ```
//! use paws_rs::{Expr, parse_str};
//!
//! let ast = parse_str("print \"hello world\"").unwrap();
//! assert_eq!(
//!     ast,
//!     Expr::scope([Expr::juxtaposition([
//!         Expr::name("print"),
//!         Expr::name("hello world"),
//!     ])]),
//! );
//! ```
//!
//! ## Parse and re-format
//!
//! ```
//! use paws_rs::{format, parse_str};
//!
//! let ast = parse_str("foo { a\nb }").unwrap();
//! assert_eq!(format(&ast), b"foo {a\nb}");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::Expr;
pub use formatter::format;
pub use lexer::{Cursor, LexError, LexErrorKind};
pub use parser::{ParseError, ParseErrorKind, parse};
pub use token::{Span, Token, TokenKind};

/// Unified error type covering both lexing and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Parse a Paws source string in one step.
///
/// # Errors
///
/// Returns [`Error`] on the first lexical or syntactic violation.
pub fn parse_str(input: &str) -> Result<Expr, Error> {
    parse(input.as_bytes())
}
