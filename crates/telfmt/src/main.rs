//! telfmt CLI.
//!
//! One decision per input: either the value to write back into the field,
//! or the reason the field should flag the input as invalid.

use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

use telfmt::{check_field, FieldAction};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("--help" | "-h") => {
            print_usage();
            ExitCode::SUCCESS
        }
        Some("-") => line_loop(),
        Some(value) => one_shot(value),
        None if io::stdin().is_terminal() => {
            print_usage();
            ExitCode::FAILURE
        }
        None => line_loop(),
    }
}

/// Format a single value and print the decision.
fn one_shot(value: &str) -> ExitCode {
    match check_field(value) {
        FieldAction::Accept { value } => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        FieldAction::Reject { reason } => {
            eprintln!("telfmt: {reason}");
            ExitCode::FAILURE
        }
    }
}

/// Treat each stdin line as one keystroke state of the field.
fn line_loop() -> ExitCode {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                eprintln!("telfmt: {error}");
                return ExitCode::FAILURE;
            }
        };
        match check_field(&line) {
            FieldAction::Accept { value } => println!("ok {value}"),
            FieldAction::Reject { reason } => println!("err {reason}"),
        }
    }
    ExitCode::SUCCESS
}

fn print_usage() {
    eprintln!("Usage: telfmt [value]");
    eprintln!();
    eprintln!("With a value, prints the formatted field value (exit 1 if rejected).");
    eprintln!("Without one (or with `-`), reads field states from stdin, one per");
    eprintln!("line, and prints `ok <value>` or `err <reason>` per line.");
}

/// Enable with `RUST_LOG=tel_parse=trace`. Quiet unless `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}
