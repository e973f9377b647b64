//! The interactive calculator loop and one-shot evaluation.
//!
//! Provides the core logic used by the binary entry point. The loop is
//! generic over its reader/writer so it can run against in-memory buffers
//! in tests exactly as it runs against stdin/stdout.

use sci_expression::{eval_str, Error};
use std::io::{self, BufRead, Write};

/// Prompt printed before each input line.
pub const PROMPT: &str = "calc > ";

/// Input that ends the session.
const EXIT_COMMAND: &str = "exit";

/// Evaluates one input line and formats the result for display.
///
/// # Errors
///
/// Whatever the expression pipeline reports; the message is ready to show
/// to the user as-is.
pub fn eval_line(input: &str) -> Result<String, Error> {
    let value = eval_str(input)?;
    Ok(format_value(value))
}

/// Formats a result value. `f64`'s `Display` already produces the shortest
/// round-trip form, so `8` rather than `8.0` and `0.25` rather than noise.
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// Runs the read-eval-print loop until `exit` or end of input.
///
/// Empty lines are skipped without evaluating. A failed line prints its
/// error and the loop continues; the evaluator holds no state across calls,
/// so the next line starts clean.
pub fn run_repl<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    print_banner(&mut output)?;

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like `exit`.
            break;
        }

        let expr = line.trim();
        if expr == EXIT_COMMAND {
            break;
        }
        if expr.is_empty() {
            continue;
        }

        match eval_line(expr) {
            Ok(result) => writeln!(output, "= {result}")?,
            Err(e) => writeln!(output, "Error: {e}")?,
        }
    }
    Ok(())
}

fn print_banner(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "========================================")?;
    writeln!(output, "         Scientific Calculator          ")?;
    writeln!(output, "========================================")?;
    writeln!(output, "Operators: + - * / ^ % ( )")?;
    writeln!(
        output,
        "Functions: sin, cos, tan, asin, acos, atan, sqrt, log, ln, abs"
    )?;
    writeln!(output, "Constants: pi, e")?;
    writeln!(output, "Example: sin(pi/2) * -5 + 2^3")?;
    writeln!(output, "Type 'exit' to quit.")?;
    writeln!(output)
}
