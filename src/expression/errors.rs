use thiserror::Error;

use crate::errors::ErrorKind;

/// Expression parsing and evaluation errors.
///
/// ┌ Malformed input (syntax, unknown function or variable)
/// └ Evaluation that leaves the finite reals (e.g. `ln(0)`, `sqrt(-1)`)
#[derive(Debug, Error)]
pub enum ExpressionError {
    #[error("empty expression")]
    Empty,

    #[error("invalid expression `{expression}`: {message}")]
    Parse { expression: String, message: String },

    #[error("cannot evaluate `{expression}`: {message}")]
    Evaluation { expression: String, message: String },

    #[error("`{expression}` is non-finite at x={x}: got {value}")]
    NonFinite { expression: String, x: f64, value: f64 },
}

impl ExpressionError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ExpressionError
    }
}
