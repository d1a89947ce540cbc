//! CLI tool to tokenize and check CE expressions.

use std::fs;
use std::process::ExitCode;

use ce_lexer::{Lexer, TokenKind};

fn usage() -> ExitCode {
    eprintln!("Usage: celex <command> [files...]");
    eprintln!("       celex <command> -e <expression>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  tokens  Print the tokens of each input");
    eprintln!("  check   Check that each input lexes without errors");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  celex tokens rules.ce");
    eprintln!("  celex check -e 'a.b >= 1.5 && @enabled'");
    ExitCode::from(2)
}

/// Lex `content`, printing tokens when `print` is set. Returns whether
/// the input was free of lexical errors.
fn run(name: &str, content: &str, print: bool) -> bool {
    let mut lexer = Lexer::new(content);
    let mut count = 0usize;
    for token in lexer.by_ref() {
        if token.kind == TokenKind::Error {
            continue;
        }
        count += 1;
        if print {
            println!("{}\t{}\t{}", token.span, token.kind, token.value);
        }
    }

    match lexer.error() {
        Some(err) => {
            eprintln!("{name}: {err}");
            false
        }
        None => {
            if !print {
                eprintln!("{name}: valid ({count} token(s))");
            }
            true
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        return usage();
    }

    let print = match args[1].as_str() {
        "tokens" => true,
        "check" => false,
        command => {
            eprintln!("Unknown command: {command}");
            return ExitCode::from(2);
        }
    };
    let inputs = &args[2..];

    if inputs.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    if inputs[0] == "-e" {
        let Some(expression) = inputs.get(1) else {
            eprintln!("Error: -e requires an expression");
            return ExitCode::from(2);
        };
        had_error = !run("<expression>", expression, print);
    } else {
        for path in inputs {
            match fs::read_to_string(path) {
                Ok(content) => {
                    if !run(path, &content, print) {
                        had_error = true;
                    }
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
