//! Scientific arithmetic expression evaluation.
//!
//! Two strictly layered stages: a lexer turning one line of text into typed
//! tokens, and a shunting-yard evaluator reducing the tokens to an `f64`.
//! Both are stateless per call, so independent evaluations can run in
//! parallel and a failed line never affects the next one.
//!
//! # Example
//!
//! ```
//! use sci_expression::{eval_str, evaluate, tokenize};
//!
//! // The two stages, separately:
//! let tokens = tokenize("2^3^2").unwrap();
//! assert_eq!(evaluate(&tokens).unwrap(), 512.0);
//!
//! // Or combined:
//! assert_eq!(eval_str("sin(pi/2) * -5 + 2^3").unwrap(), 3.0);
//! ```

pub mod error;
pub mod evaluate;
pub mod functions;
pub mod lexer;
pub mod token;

// Re-export the core public API
pub use error::{Error, EvalError, LexError, MathError, SyntaxError};
pub use evaluate::evaluate;
pub use lexer::tokenize;
pub use token::Token;

/// Tokenizes and evaluates `input` in one call.
///
/// # Errors
///
/// `Error::Lex` from the scanning stage, `Error::Eval` from the evaluation
/// stage; the first failure aborts the call with no partial result.
///
/// # Example
///
/// ```
/// use sci_expression::eval_str;
///
/// assert_eq!(eval_str("sqrt(16)").unwrap(), 4.0);
/// assert!(eval_str("5 & 3").is_err());
/// ```
pub fn eval_str(input: &str) -> Result<f64, Error> {
    let tokens = tokenize(input)?;
    Ok(evaluate(&tokens)?)
}
