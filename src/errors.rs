//! Error taxonomy shared by every solver.
//!
//! Each module keeps its own `thiserror` enum; [`ErrorKind`] is the coarse
//! classification callers branch on (e.g. to pick a notification message).
//!
//! ┌ input errors      : [`ErrorKind::InvalidInput`], [`ErrorKind::InvalidInitialGuess`],
//! │                     [`ErrorKind::DimensionMismatch`]
//! ├ preconditions     : [`ErrorKind::NoRootInInterval`]
//! ├ numeric degeneracy: [`ErrorKind::SingularMatrix`], [`ErrorKind::DegenerateInterval`],
//! │                     [`ErrorKind::ZeroDiagonal`], [`ErrorKind::ZeroDerivative`],
//! │                     [`ErrorKind::DivisionByZero`]
//! ├ convergence       : [`ErrorKind::MaxIterationsExceeded`]
//! └ evaluator         : [`ErrorKind::ExpressionError`]

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    InvalidInput,
    InvalidInitialGuess,
    DimensionMismatch,
    NoRootInInterval,
    SingularMatrix,
    DegenerateInterval,
    ZeroDiagonal,
    ZeroDerivative,
    DivisionByZero,
    MaxIterationsExceeded,
    ExpressionError,
}

impl ErrorKind {
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::InvalidInput          => "invalid_input",
            ErrorKind::InvalidInitialGuess   => "invalid_initial_guess",
            ErrorKind::DimensionMismatch     => "dimension_mismatch",
            ErrorKind::NoRootInInterval      => "no_root_in_interval",
            ErrorKind::SingularMatrix        => "singular_matrix",
            ErrorKind::DegenerateInterval    => "degenerate_interval",
            ErrorKind::ZeroDiagonal          => "zero_diagonal",
            ErrorKind::ZeroDerivative        => "zero_derivative",
            ErrorKind::DivisionByZero        => "division_by_zero",
            ErrorKind::MaxIterationsExceeded => "max_iterations_exceeded",
            ErrorKind::ExpressionError       => "expression_error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
