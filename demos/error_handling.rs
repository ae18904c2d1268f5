//! Demonstrate error handling for invalid Paws input.

fn main() {
    // Unterminated quoted name
    match paws_rs::parse_str("say \"unclosed") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(paws_rs::Error::Lex(e)) => {
            println!("Lex error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.span.line, e.span.column);
        }
        Err(paws_rs::Error::Parse(e)) => {
            println!("Parse error: {e}");
        }
    }

    println!();

    // Unclosed scope
    match paws_rs::parse_str("outer {inner") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(paws_rs::Error::Lex(e)) => {
            println!("Lex error: {e}");
        }
        Err(paws_rs::Error::Parse(e)) => {
            println!("Parse error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.span.line, e.span.column);
        }
    }
}
