//! Expression tree produced by the parser.

/// A Paws expression.
///
/// Every node exclusively owns its children; the tree has no
/// back-references, no sharing, and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Block of newline-separated expressions, delimited by `{ }` or
    /// implicit at the top level. Items preserve source order.
    Scope { items: Vec<Expr> },
    /// Two or more adjacent expressions applied left-to-right. The
    /// parser never produces fewer than two operands; a lone term is
    /// returned as itself.
    Juxtaposition { operands: Vec<Expr> },
    /// Bare identifier or quoted literal. The bytes are not
    /// guaranteed valid UTF-8; quoted names exclude the surrounding
    /// quotes.
    Name { text: Vec<u8> },
}

impl Expr {
    /// Build a scope from its items.
    #[must_use]
    pub fn scope(items: impl Into<Vec<Self>>) -> Self {
        Self::Scope {
            items: items.into(),
        }
    }

    /// Build a juxtaposition from its operands.
    ///
    /// The parser-side minimum of two operands is not enforced for
    /// hand-built trees.
    #[must_use]
    pub fn juxtaposition(operands: impl Into<Vec<Self>>) -> Self {
        Self::Juxtaposition {
            operands: operands.into(),
        }
    }

    /// Build a name from its bytes.
    #[must_use]
    pub fn name(text: impl Into<Vec<u8>>) -> Self {
        Self::Name { text: text.into() }
    }
}
