//! Scientific calculator command-line tool.
//!
//! The expression core lives in `sci-expression`; this crate adds the thin
//! interactive surface around it: the read-eval-print loop, result
//! formatting, and the binary entry point.

pub mod calc_cli;
