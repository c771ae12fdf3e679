//! `meval`-backed implementation of the evaluator contract.
//!
//! Inputs are lowercased before parsing, so `X^2 - 4`, `x^2 - 4` and
//! `SIN(x)` all parse. `^` is the power operator. Functions and constants
//! come from `meval`'s default context (`sin`, `cos`, `exp`, `ln`, `sqrt`,
//! `abs`, `pi`, `e`, ...).

use std::fmt;
use std::str::FromStr;

use meval::{Context, Expr};

use super::errors::ExpressionError;

/// Central-difference step used for numerical derivatives.
pub const DEFAULT_DERIVATIVE_STEP: f64 = 1e-4;

/// Free variable of single-variable expressions.
pub const VARIABLE: &str = "x";

/// Single-variable function `f(x)` consumed by the root-finding solvers.
///
/// - `source`     : the text shown in step formulas
/// - `eval`       : `f(x)`; must fail rather than return a non-finite value
/// - `derivative` : `f'(x)`, central difference `(f(x+h) - f(x-h)) / 2h` by default
pub trait Evaluator {
    fn source(&self) -> &str;

    fn eval(&self, x: f64) -> Result<f64, ExpressionError>;

    fn derivative(&self, x: f64, h: f64) -> Result<f64, ExpressionError> {
        let forward  = self.eval(x + h)?;
        let backward = self.eval(x - h)?;
        Ok((forward - backward) / (2.0 * h))
    }
}

#[inline]
fn parse_expr(expression: &str) -> Result<Expr, ExpressionError> {
    let src = expression.trim();
    if src.is_empty() {
        return Err(ExpressionError::Empty);
    }

    src.to_lowercase()
        .parse::<Expr>()
        .map_err(|e| ExpressionError::Parse {
            expression: expression.to_string(),
            message:    e.to_string(),
        })
}

/// Evaluates `expression` with the given variable bindings.
///
/// Binding names are case-insensitive, like the expression itself.
///
/// # Errors
/// - [`ExpressionError::Empty`]      : blank input
/// - [`ExpressionError::Parse`]      : syntax error
/// - [`ExpressionError::Evaluation`] : unknown variable or function
/// - [`ExpressionError::NonFinite`]  : result is NaN or infinite
pub fn evaluate(expression: &str, bindings: &[(&str, f64)]) -> Result<f64, ExpressionError> {
    let expr = parse_expr(expression)?;

    let mut ctx = Context::new();
    for &(name, value) in bindings {
        ctx.var(name.to_lowercase(), value);
    }

    let value = expr
        .eval_with_context(ctx)
        .map_err(|e| ExpressionError::Evaluation {
            expression: expression.to_string(),
            message:    e.to_string(),
        })?;

    if !value.is_finite() {
        let x = bindings
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(VARIABLE))
            .map_or(f64::NAN, |&(_, v)| v);
        return Err(ExpressionError::NonFinite { expression: expression.to_string(), x, value });
    }

    Ok(value)
}

/// Central-difference derivative of `expression` with respect to `x`.
///
/// `f'(x) ≈ (f(x + h) - f(x - h)) / 2h`; pass [`DEFAULT_DERIVATIVE_STEP`]
/// for the usual `h = 1e-4`.
pub fn numerical_derivative(expression: &str, x: f64, h: f64) -> Result<f64, ExpressionError> {
    let forward  = evaluate(expression, &[(VARIABLE, x + h)])?;
    let backward = evaluate(expression, &[(VARIABLE, x - h)])?;
    Ok((forward - backward) / (2.0 * h))
}

/// Parsed single-variable expression.
///
/// Parsing binds `x` once, so repeated evaluation inside a solver loop does
/// not re-parse. Any variable other than `x` (or a default constant) is
/// rejected at parse time.
pub struct Expression {
    source: String,
    func:   Box<dyn Fn(f64) -> f64>,
}

impl Expression {
    pub fn parse(source: &str) -> Result<Self, ExpressionError> {
        let expr = parse_expr(source)?;
        let func = expr.bind(VARIABLE).map_err(|e| ExpressionError::Parse {
            expression: source.to_string(),
            message:    e.to_string(),
        })?;

        Ok(Self {
            source: source.trim().to_string(),
            func:   Box::new(func),
        })
    }
}

impl Evaluator for Expression {
    fn source(&self) -> &str {
        &self.source
    }

    fn eval(&self, x: f64) -> Result<f64, ExpressionError> {
        let value = (self.func)(x);
        if !value.is_finite() {
            return Err(ExpressionError::NonFinite { expression: self.source.clone(), x, value });
        }
        Ok(value)
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression").field("source", &self.source).finish()
    }
}
