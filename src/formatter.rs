//! Pretty-printer that serializes an expression tree back into
//! canonical source bytes.
//!
//! The output re-parses to the same tree: the top-level scope is one
//! expression per line with no trailing newline, nested scopes hug
//! their braces (the grammar rejects a separator just inside `{` or
//! before `}`), and a juxtaposition operand that is itself a
//! juxtaposition is parenthesized so its operands do not merge into
//! the outer chain.

use crate::ast::Expr;

/// Format an expression tree into canonical source bytes.
///
/// An [`Expr::Scope`] root is rendered as the implicit top-level
/// scope, without braces; any other root is rendered as a bare
/// expression.
#[must_use]
pub fn format(expr: &Expr) -> Vec<u8> {
    let mut out = Vec::new();
    if let Expr::Scope { items } = expr {
        format_items(&mut out, items);
    } else {
        format_expr(&mut out, expr);
    }
    out
}

fn format_items(out: &mut Vec<u8>, items: &[Expr]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        format_expr(out, item);
    }
}

fn format_expr(out: &mut Vec<u8>, expr: &Expr) {
    match expr {
        Expr::Scope { items } => {
            out.push(b'{');
            format_items(out, items);
            out.push(b'}');
        }
        Expr::Juxtaposition { operands } => {
            for (i, operand) in operands.iter().enumerate() {
                if i > 0 {
                    out.push(b' ');
                }
                if matches!(operand, Expr::Juxtaposition { .. }) {
                    out.push(b'(');
                    format_expr(out, operand);
                    out.push(b')');
                } else {
                    format_expr(out, operand);
                }
            }
        }
        Expr::Name { text } => format_name(out, text),
    }
}

fn format_name(out: &mut Vec<u8>, text: &[u8]) {
    if needs_quotes(text) {
        format_quoted(out, text);
    } else {
        out.extend_from_slice(text);
    }
}

/// A name must be quoted when it could not lex back as one bare
/// token: empty, containing a token-terminating byte, or starting
/// with a quote.
fn needs_quotes(text: &[u8]) -> bool {
    text.is_empty()
        || text.first() == Some(&b'"')
        || text
            .iter()
            .any(|&b| matches!(b, b' ' | b'\n' | b'(' | b')' | b'{' | b'}'))
}

/// Quoted names carry their bytes verbatim; the lexer performs no
/// escape translation. A backslash-byte pair is emitted as-is. A
/// quote without a preceding backslash, or a lone trailing backslash,
/// has no exact source spelling; a backslash is inserted so the
/// output still lexes.
fn format_quoted(out: &mut Vec<u8>, text: &[u8]) {
    out.push(b'"');
    let mut i = 0;
    while i < text.len() {
        match text[i] {
            b'\\' if i + 1 < text.len() => {
                out.push(b'\\');
                out.push(text[i + 1]);
                i += 2;
            }
            b'\\' => {
                out.extend_from_slice(b"\\\\");
                i += 1;
            }
            b'"' => {
                out.extend_from_slice(b"\\\"");
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    out.push(b'"');
}
