/// Source location for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input (zero-width; the cursor never moves past it).
    End,
    /// Newline (expression separator).
    Newline,
    /// Bare identifier or quoted literal.
    Name,
    /// Opening parenthesis `(`.
    LParen,
    /// Closing parenthesis `)`.
    RParen,
    /// Opening brace `{`.
    LBrace,
    /// Closing brace `}`.
    RBrace,
}

/// A single token with its kind, name payload, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Name bytes, present exactly when `kind` is [`TokenKind::Name`].
    /// Not guaranteed to be valid UTF-8; quoted names exclude the
    /// surrounding quotes.
    pub text: Option<Vec<u8>>,
    pub span: Span,
}

impl Token {
    /// Human-readable description for diagnostics. `None` means end
    /// of input.
    #[must_use]
    pub fn describe(&self) -> Option<String> {
        match self.kind {
            TokenKind::End => None,
            TokenKind::Newline => Some("newline".to_string()),
            TokenKind::LParen => Some("(".to_string()),
            TokenKind::RParen => Some(")".to_string()),
            TokenKind::LBrace => Some("{".to_string()),
            TokenKind::RBrace => Some("}".to_string()),
            TokenKind::Name => self
                .text
                .as_deref()
                .map(|text| String::from_utf8_lossy(text).into_owned()),
        }
    }
}
