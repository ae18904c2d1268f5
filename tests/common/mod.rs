#![allow(dead_code)]

use paws_rs::{Expr, format, parse, parse_str};

pub fn roundtrip(input: &str) {
    let ast = parse_str(input).expect("parse failed");
    let output = format(&ast);
    let output = String::from_utf8_lossy(&output);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

/// Helper: format an AST, parse it back, assert structural equality.
pub fn assert_ast_roundtrip(original: &Expr) {
    let formatted = format(original);
    let parsed = parse(&formatted).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{}",
            String::from_utf8_lossy(&formatted)
        )
    });

    assert_eq!(
        original,
        &parsed,
        "tree mismatch\n--- formatted ---\n{}",
        String::from_utf8_lossy(&formatted)
    );
}
