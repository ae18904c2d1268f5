//! CLI tool to validate and format Paws source files.

use std::fs;
use std::io::Write as _;
use std::process::ExitCode;

use paws_rs::Expr;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: paws <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  validate  Check if Paws source file(s) parse");
        eprintln!("  fmt       Format source file(s) and print to stdout");
        eprintln!("  check     Check if source file(s) are in canonical form");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  paws validate program.paws");
        eprintln!("  paws fmt program.paws");
        eprintln!("  paws check program.paws");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "validate" => match paws_rs::parse(&content) {
                Ok(ast) => {
                    eprintln!("{path}: valid ({} expression(s))", item_count(&ast));
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            "fmt" => match paws_rs::parse(&content) {
                Ok(ast) => {
                    let formatted = paws_rs::format(&ast);
                    if let Err(e) = std::io::stdout().write_all(&formatted) {
                        eprintln!("{path}: {e}");
                        had_error = true;
                    }
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            "check" => match paws_rs::parse(&content) {
                Ok(ast) => {
                    if paws_rs::format(&ast) == content {
                        eprintln!("{path}: formatted");
                    } else {
                        eprintln!("{path}: not formatted");
                        had_error = true;
                    }
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn item_count(ast: &Expr) -> usize {
    match ast {
        Expr::Scope { items } => items.len(),
        _ => 1,
    }
}
