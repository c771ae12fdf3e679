//! Direct solvers: Gauss elimination and Gauss-Jordan.
//!
//! Both work on the augmented matrix `[A | b]` with partial pivoting and
//! record every row swap, normalization and elimination as its own step.
//!
//! ┌ [`gauss_elimination`] : zero below each pivot, then back substitution
//! └ [`gauss_jordan`]      : normalize each pivot row, zero above and below;
//!                          the last column is the solution

use super::algorithms::{Algorithm, DirectFamily};
use super::errors::LinearSystemError;
use super::system::{augmented_latex, solution_latex, MatrixSystem, PIVOT_EPSILON};
use crate::steps::format::fx;
use crate::steps::{IterationTable, Solution, StepRecorder, Termination};

const MATRIX_FORMULA: &str = "\\text{Augmented Matrix:}";


#[inline]
fn record_matrix(steps: &mut StepRecorder, description: impl Into<String>, aug: &[Vec<f64>]) {
    steps.record(description, MATRIX_FORMULA, augmented_latex(aug), None);
}

/// Partial pivoting for column `col`.
///
/// Swaps the row at or below `col` with the largest `|aug[row][col]|` into
/// place (recording the swap), then rejects pivots under [`PIVOT_EPSILON`].
fn select_pivot(
    aug: &mut [Vec<f64>],
    col: usize,
    steps: &mut StepRecorder,
) -> Result<f64, LinearSystemError> {
    let n = aug.len();
    let mut max_row = col;
    for row in col + 1..n {
        if aug[row][col].abs() > aug[max_row][col].abs() {
            max_row = row;
        }
    }

    if max_row != col {
        aug.swap(col, max_row);
        record_matrix(steps, format!("Swapped row {} with row {}", col + 1, max_row + 1), aug);
    }

    let pivot = aug[col][col];
    if pivot.abs() < PIVOT_EPSILON {
        return Err(LinearSystemError::SingularMatrix { column: col, pivot });
    }
    Ok(pivot)
}

/// `aug[target] -= factor * aug[source]` from column `from` onward; the
/// entry in column `from` is set to exactly zero.
#[inline]
fn subtract_row(aug: &mut [Vec<f64>], target: usize, source: usize, factor: f64, from: usize) {
    let width = aug[source].len();
    for col in from..width {
        aug[target][col] -= factor * aug[source][col];
    }
    aug[target][from] = 0.0;
}

/// Solves an upper-triangular augmented matrix, last row first.
fn back_substitute(aug: &[Vec<f64>]) -> Vec<f64> {
    let n = aug.len();
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let known: f64 = (i + 1..n).map(|j| aug[i][j] * x[j]).sum();
        x[i] = (aug[i][n] - known) / aug[i][i];
    }
    x
}

fn finish(
    algorithm: Algorithm,
    mut steps: StepRecorder,
    description: &str,
    solution: Vec<f64>,
) -> Solution {
    steps.record(description, "\\text{Solution:}", solution_latex(&solution), None);

    let mut table = IterationTable::new(["Variable", "Value"]);
    for (i, &v) in solution.iter().enumerate() {
        table.push_row(vec![format!("x{}", i + 1), fx(v)]);
    }

    let answer = format!(
        "Solution: {}",
        solution
            .iter()
            .enumerate()
            .map(|(i, &v)| format!("x{} = {}", i + 1, fx(v)))
            .collect::<Vec<_>>()
            .join(", ")
    );

    log::debug!("{algorithm} finished in {} steps: {solution:?}", steps.len());
    Solution::new(algorithm.title(), steps.into_steps(), answer, Termination::Completed)
        .with_table(table)
        .with_solution(solution)
}


/// Solves `A x = b` by Gauss elimination with partial pivoting.
///
/// # Steps recorded
/// - the initial augmented matrix
/// - every row swap
/// - one elimination per row below each pivot, with its factor
/// - the solution after back substitution
///
/// # Errors
/// - [`LinearSystemError::SingularMatrix`] : a pivot magnitude below `1e-10`
pub fn gauss_elimination(system: &MatrixSystem) -> Result<Solution, LinearSystemError> {
    let algorithm = Algorithm::Direct(DirectFamily::GaussElimination);
    let n = system.n();
    let mut aug = system.augmented();
    let mut steps = StepRecorder::new();
    record_matrix(&mut steps, "Initial augmented matrix", &aug);

    for pivot in 0..n {
        let p = select_pivot(&mut aug, pivot, &mut steps)?;

        for row in pivot + 1..n {
            let factor = aug[row][pivot] / p;
            subtract_row(&mut aug, row, pivot, factor, pivot);
            record_matrix(
                &mut steps,
                format!(
                    "Eliminated x{} from equation {} using factor {}",
                    pivot + 1, row + 1, fx(factor)
                ),
                &aug,
            );
        }
    }

    let solution = back_substitute(&aug);
    Ok(finish(algorithm, steps, "Final Solution (after back substitution)", solution))
}


/// Solves `A x = b` by Gauss-Jordan reduction to reduced row-echelon form.
///
/// # Steps recorded
/// - the initial augmented matrix
/// - every row swap
/// - the normalization of each pivot row
/// - one elimination per other row (above and below) for each pivot
/// - the solution read from the last column
///
/// # Errors
/// - [`LinearSystemError::SingularMatrix`] : a pivot magnitude below `1e-10`
pub fn gauss_jordan(system: &MatrixSystem) -> Result<Solution, LinearSystemError> {
    let algorithm = Algorithm::Direct(DirectFamily::GaussJordan);
    let n = system.n();
    let mut aug = system.augmented();
    let mut steps = StepRecorder::new();
    record_matrix(&mut steps, "Initial augmented matrix", &aug);

    for pivot in 0..n {
        let p = select_pivot(&mut aug, pivot, &mut steps)?;

        for col in pivot..=n {
            aug[pivot][col] /= p;
        }
        aug[pivot][pivot] = 1.0;
        record_matrix(&mut steps, format!("Normalized row {}", pivot + 1), &aug);

        for row in (0..n).filter(|&r| r != pivot) {
            let factor = aug[row][pivot];
            subtract_row(&mut aug, row, pivot, factor, pivot);
            record_matrix(
                &mut steps,
                format!("Eliminated x{} from equation {}", pivot + 1, row + 1),
                &aug,
            );
        }
    }

    let solution = aug.iter().map(|row| row[n]).collect();
    Ok(finish(algorithm, steps, "Final Solution (reduced row echelon form)", solution))
}
