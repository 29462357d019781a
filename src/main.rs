use std::io::{self, BufRead, Write};

use clap::Parser;
use wordcalc::eval_line;

/// wordcalc is a line-oriented calculator that understands word-based
/// arithmetic operators: "join", "leave", "group" and "split".
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A single expression to evaluate. When omitted, expressions are read
    /// line by line from standard input until end of input.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match eval_line(&expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let mut stdin = io::stdin().lock();
    let mut input = String::new();

    loop {
        print!("input> ");
        if io::stdout().flush().is_err() {
            return;
        }

        input.clear();
        match stdin.read_line(&mut input) {
            Ok(0) => break, // end of input
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read from standard input: {e}");
                std::process::exit(1);
            },
        }

        let line = input.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }

        match eval_line(line) {
            Ok(value) => println!("{value}"),
            // A failed line never affects the next one.
            Err(e) => eprintln!("{e}"),
        }
    }
}
