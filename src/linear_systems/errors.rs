use thiserror::Error;

use crate::errors::ErrorKind;

#[derive(Debug, Error)]
pub enum LinearSystemError {
    #[error("empty system: need at least one equation")]
    Empty,

    #[error("dimension mismatch: {rows} rows, a row of {cols} columns and {constants} constants; \
             need an n×n matrix and n constants")]
    DimensionMismatch { rows: usize, cols: usize, constants: usize },

    #[error("unsupported system size {n}×{n}: this method requires exactly {expected}×{expected}")]
    UnsupportedSize { n: usize, expected: usize },

    #[error("non-finite entry at row {row}, column {col}")]
    NonFiniteEntry { row: usize, col: usize },

    #[error("matrix is singular: pivot {pivot} in column {column} below 1e-10, no unique solution exists")]
    SingularMatrix { column: usize, pivot: f64 },

    #[error("diagonal element in row {row} cannot be 0")]
    ZeroDiagonal { row: usize },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid decimal places: must be <= {max}. got {got}")]
    InvalidDecimalPlaces { got: u32, max: u32 },
}

impl LinearSystemError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinearSystemError::Empty
            | LinearSystemError::DimensionMismatch { .. }
            | LinearSystemError::UnsupportedSize { .. }      => ErrorKind::DimensionMismatch,
            LinearSystemError::SingularMatrix { .. }         => ErrorKind::SingularMatrix,
            LinearSystemError::ZeroDiagonal { .. }           => ErrorKind::ZeroDiagonal,
            LinearSystemError::NonFiniteEntry { .. }
            | LinearSystemError::InvalidMaxIter { .. }
            | LinearSystemError::InvalidDecimalPlaces { .. } => ErrorKind::InvalidInput,
        }
    }
}
