//! `sci-calc`: scientific expression calculator.
//!
//! Usage:
//!   sci-calc                 interactive REPL on stdin/stdout
//!   sci-calc -e '<expr>'     evaluate one expression and exit
//!   sci-calc -h | -V         help / version

use sci_calc::calc_cli::{eval_line, run_repl};
use std::io;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: sci-calc [OPTIONS]

Options:
  -e, --eval <EXPR>  Evaluate one expression and exit
  -h, --help         Show this help message
  -V, --version      Show version
";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None => {
            let stdin = io::stdin();
            if let Err(e) = run_repl(stdin.lock(), io::stdout()) {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Some("-h") | Some("--help") => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Some("-V") | Some("--version") => {
            println!("sci-calc {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Some("-e") | Some("--eval") => {
            let expr = match args.get(1) {
                Some(expr) if args.len() == 2 => expr,
                _ => {
                    eprintln!("The --eval option takes exactly one expression.");
                    eprint!("{USAGE}");
                    return ExitCode::FAILURE;
                }
            };
            match eval_line(expr) {
                Ok(result) => {
                    println!("{result}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Some(other) => {
            eprintln!("Unknown option: {other}");
            eprint!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}
