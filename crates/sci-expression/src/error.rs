//! Typed errors for the lexing and evaluation stages.

use thiserror::Error;

/// Scanning failure. The whole input line is rejected; nothing is consumed
/// past the offending position.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexError {
    #[error("unknown character: '{0}'")]
    UnknownCharacter(char),

    #[error("invalid number literal: '{0}'")]
    InvalidNumber(String),
}

/// Structural problem in the token sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("mismatched parenthesis")]
    MismatchedParenthesis,

    #[error("invalid expression")]
    InvalidExpression,
}

/// The token sequence was legal but an operation is undefined for its
/// operands.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    #[error("sqrt of negative number")]
    SqrtOfNegative,

    #[error("power undefined for these operands")]
    PowerUndefined,

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("unknown operator: '{0}'")]
    UnknownOperator(char),
}

/// Any failure `evaluate` can report.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Math(#[from] MathError),
}

/// Any failure of the combined tokenize-then-evaluate pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
