//! Root-finding error types.
//!
//! [`RootFindingError`] : errors common to every root-finding method
//!  ├ evaluator failures (propagated from [`ExpressionError`])
//!  ├ non-convergence within `max_iter`
//!  └ invalid global parameters (`max_iter`, `decimal_places`)
//!
//! Method-specific errors (e.g. `BisectionError`) wrap it via `#[from]`.

use thiserror::Error;

use crate::errors::ErrorKind;
use crate::expression::ExpressionError;


/// Root-finding runtime errors shared by all methods.
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error("max iterations ({max_iter}) reached without solution")]
    MaxIterationsExceeded { max_iter: usize },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid decimal places: must be <= {max}. got {got}")]
    InvalidDecimalPlaces { got: u32, max: u32 },
}

impl RootFindingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RootFindingError::Expression(e)                => e.kind(),
            RootFindingError::MaxIterationsExceeded { .. } => ErrorKind::MaxIterationsExceeded,
            RootFindingError::InvalidMaxIter { .. }
            | RootFindingError::InvalidDecimalPlaces { .. } => ErrorKind::InvalidInput,
        }
    }
}
