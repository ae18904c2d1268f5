//! Parse a Paws program and print its tree and canonical form.

fn main() {
    let source = "def greet {say \"hello world\"\nsay goodbye}\ngreet (once more)";

    match paws_rs::parse_str(source) {
        Ok(ast) => {
            println!("Tree:\n{ast:#?}");
            println!();
            let canonical = paws_rs::format(&ast);
            println!("Canonical:\n{}", String::from_utf8_lossy(&canonical));
        }
        Err(e) => eprintln!("Parse failed: {e}"),
    }
}
