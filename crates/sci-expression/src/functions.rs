//! Function and constant registries.
//!
//! These tables are the only configuration the evaluator consults. They are
//! immutable and `const`, so independent evaluations can run in parallel
//! without sharing mutable state.

use crate::error::MathError;

/// Magnitudes at or below this are snapped to exactly `0.0` by
/// [`result_clean`]. Wide enough to cover the trig noise of `sin(pi)`.
const CLEAN_EPSILON: f64 = 1e-14;

/// Value bound to the `pi` constant.
pub const PI: f64 = 3.141592653589793;

/// Value bound to the `e` constant.
///
/// Not `f64::consts::E`: the last four digits are truncated, and the exact
/// value is part of the observable output.
pub const E: f64 = 2.718281828459;

/// The type of a function application.
pub type ApplyFn = fn(f64) -> Result<f64, MathError>;

/// One entry of the function registry.
pub struct FunctionDefinition {
    pub name: &'static str,
    pub apply: ApplyFn,
}

fn sin_apply(x: f64) -> Result<f64, MathError> {
    Ok(x.sin())
}

fn cos_apply(x: f64) -> Result<f64, MathError> {
    Ok(x.cos())
}

fn tan_apply(x: f64) -> Result<f64, MathError> {
    Ok(x.tan())
}

fn asin_apply(x: f64) -> Result<f64, MathError> {
    Ok(x.asin())
}

fn acos_apply(x: f64) -> Result<f64, MathError> {
    Ok(x.acos())
}

fn atan_apply(x: f64) -> Result<f64, MathError> {
    Ok(x.atan())
}

fn sqrt_apply(x: f64) -> Result<f64, MathError> {
    if x < 0.0 {
        return Err(MathError::SqrtOfNegative);
    }
    Ok(x.sqrt())
}

fn log_apply(x: f64) -> Result<f64, MathError> {
    Ok(x.log10())
}

fn ln_apply(x: f64) -> Result<f64, MathError> {
    Ok(x.ln())
}

fn abs_apply(x: f64) -> Result<f64, MathError> {
    Ok(x.abs())
}

/// All supported functions. Names are lower case; the lexer has already
/// case-folded identifiers by the time a lookup happens.
pub const FUNCTIONS: &[FunctionDefinition] = &[
    FunctionDefinition { name: "sin", apply: sin_apply },
    FunctionDefinition { name: "cos", apply: cos_apply },
    FunctionDefinition { name: "tan", apply: tan_apply },
    FunctionDefinition { name: "asin", apply: asin_apply },
    FunctionDefinition { name: "acos", apply: acos_apply },
    FunctionDefinition { name: "atan", apply: atan_apply },
    FunctionDefinition { name: "sqrt", apply: sqrt_apply },
    FunctionDefinition { name: "log", apply: log_apply },
    FunctionDefinition { name: "ln", apply: ln_apply },
    FunctionDefinition { name: "abs", apply: abs_apply },
];

/// Looks up a function definition by (lower-cased) name.
pub fn lookup_function(name: &str) -> Option<&'static FunctionDefinition> {
    FUNCTIONS.iter().find(|def| def.name == name)
}

/// Applies a named function to its operand.
///
/// # Errors
///
/// `MathError::UnknownFunction` if the name is not registered, or whatever
/// the function itself reports (e.g. `sqrt` of a negative operand).
pub fn apply_function(name: &str, operand: f64) -> Result<f64, MathError> {
    let def = lookup_function(name).ok_or_else(|| MathError::UnknownFunction(name.to_string()))?;
    let result = (def.apply)(operand)?;
    Ok(result_clean(result))
}

/// Looks up a constant by (lower-cased) name. Returns the canonical name
/// alongside the value so tokens carry the registry spelling.
pub fn lookup_constant(name: &str) -> Option<(&'static str, f64)> {
    match name {
        "pi" => Some(("pi", PI)),
        "e" => Some(("e", E)),
        _ => None,
    }
}

/// Snaps floating-point noise to zero.
///
/// Every function result passes through this; plain operator results do not.
pub fn result_clean(value: f64) -> f64 {
    if value.abs() <= CLEAN_EPSILON {
        return 0.0;
    }
    value
}
