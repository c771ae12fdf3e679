//! Validated linear system `A x = b` and its LaTeX renderings.

use super::errors::LinearSystemError;
use crate::steps::format::fx;

/// Pivots with magnitude below this are treated as zero.
pub const PIVOT_EPSILON: f64 = 1e-10;

/// Square coefficient matrix `A` (n×n) with constants `b` (length n).
///
/// Construction through [`MatrixSystem::new`] guarantees
/// `A.rows == A.cols == b.len() >= 1` and that every entry is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixSystem {
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
}

impl MatrixSystem {
    /// # Errors
    /// - [`LinearSystemError::Empty`]             : no rows
    /// - [`LinearSystemError::DimensionMismatch`] : ragged/non-square `A` or `b.len() != n`
    /// - [`LinearSystemError::NonFiniteEntry`]    : NaN/inf in `A` or `b` (`col == n` for `b`)
    pub fn new(a: Vec<Vec<f64>>, b: Vec<f64>) -> Result<Self, LinearSystemError> {
        let n = a.len();
        if n == 0 {
            return Err(LinearSystemError::Empty);
        }

        let cols = a.iter().map(Vec::len).find(|&len| len != n).unwrap_or(n);
        if cols != n || b.len() != n {
            return Err(LinearSystemError::DimensionMismatch { rows: n, cols, constants: b.len() });
        }

        for (row, coeffs) in a.iter().enumerate() {
            if let Some(col) = coeffs.iter().position(|v| !v.is_finite()) {
                return Err(LinearSystemError::NonFiniteEntry { row, col });
            }
            if !b[row].is_finite() {
                return Err(LinearSystemError::NonFiniteEntry { row, col: n });
            }
        }

        Ok(Self { a, b })
    }

    pub fn n(&self) -> usize { self.b.len() }
    pub fn matrix(&self) -> &[Vec<f64>] { &self.a }
    pub fn constants(&self) -> &[f64] { &self.b }

    /// `[A | b]`, one row per equation with the constant appended.
    pub fn augmented(&self) -> Vec<Vec<f64>> {
        self.a
            .iter()
            .zip(&self.b)
            .map(|(row, &bi)| {
                let mut r = row.clone();
                r.push(bi);
                r
            })
            .collect()
    }

    /// `|A[i][i]| > Σ_{j≠i} |A[i][j]|` for every row.
    pub fn is_diagonally_dominant(&self) -> bool {
        self.a.iter().enumerate().all(|(i, row)| {
            let off: f64 = row
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, v)| v.abs())
                .sum();
            row[i].abs() > off
        })
    }

    /// `max_i |(A x)_i - b_i|`.
    pub fn residual(&self, x: &[f64]) -> f64 {
        self.a
            .iter()
            .zip(&self.b)
            .map(|(row, &bi)| {
                let ax: f64 = row.iter().zip(x).map(|(aij, xj)| aij * xj).sum();
                (ax - bi).abs()
            })
            .fold(0.0, f64::max)
    }

    /// Equations as `\begin{aligned} a x_{1} + ... = b \\ ... \end{aligned}`.
    pub fn equations_latex(&self) -> String {
        let eqs = self
            .a
            .iter()
            .zip(&self.b)
            .map(|(row, &bi)| {
                let lhs = row
                    .iter()
                    .enumerate()
                    .map(|(j, &coef)| format!("{}x_{{{}}}", fx(coef), j + 1))
                    .collect::<Vec<_>>()
                    .join(" + ");
                format!("{lhs} = {}", fx(bi))
            })
            .collect::<Vec<_>>()
            .join(" \\\\ ");
        format!("\\begin{{aligned}} {eqs} \\end{{aligned}}")
    }
}

/// Augmented matrix as `\begin{bmatrix} ... \end{bmatrix}`.
pub(crate) fn augmented_latex(aug: &[Vec<f64>]) -> String {
    let rows = aug
        .iter()
        .map(|row| row.iter().map(|&v| fx(v)).collect::<Vec<_>>().join(" & "))
        .collect::<Vec<_>>()
        .join(" \\\\ ");
    format!("\\begin{{bmatrix}} {rows} \\end{{bmatrix}}")
}

/// Solution vector as `\begin{aligned} x_{1} = ..., \\ ... \end{aligned}`.
pub(crate) fn solution_latex(x: &[f64]) -> String {
    let body = x
        .iter()
        .enumerate()
        .map(|(i, &v)| format!("x_{{{}}} = {}", i + 1, fx(v)))
        .collect::<Vec<_>>()
        .join(", \\\\ ");
    format!("\\begin{{aligned}} {body} \\end{{aligned}}")
}
