//! Iterative solvers for 3×3 systems: Gauss-Seidel and Jacobi.
//!
//! Both start from `x = y = z = 0` and rearrange row `i` for unknown `i`:
//!
//! `x_i = (b_i - Σ_{j≠i} A[i][j] x_j) / A[i][i]`
//!
//! The only difference is which `x_j` feed the update:
//!
//! ┌ [`UpdateRule::Immediate`]    (Gauss-Seidel) : values from this pass as soon as they exist
//! └ [`UpdateRule::Simultaneous`] (Jacobi)       : values from the previous pass only
//!
//! Reaching `max_iter` is not an error here; the returned [`Solution`]
//! carries [`Termination::IterationLimit`] instead.

use super::algorithms::{Algorithm, IterativeFamily};
use super::config::IterativeCfg;
use super::errors::LinearSystemError;
use super::system::MatrixSystem;
use crate::steps::format::fx;
use crate::steps::{IterationSnapshot, IterationTable, Solution, StepRecorder, Termination};

const SIZE: usize = 3;


/// Which iterate values feed each component update.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum UpdateRule {
    Immediate,
    Simultaneous,
}


/// Solves a 3×3 system with the
/// [Gauss-Seidel method](https://en.wikipedia.org/wiki/Gauss%E2%80%93Seidel_method).
///
/// Within one pass `x` is updated first, then `y` using the new `x`, then
/// `z` using the new `x` and `y`.
///
/// # Behavior
/// - Error is `max(|x - x_prev|, |y - y_prev|, |z - z_prev|)`
/// - Stops when `error <= tol` ([`Termination::ToleranceReached`]) or after
///   `max_iter` passes ([`Termination::IterationLimit`])
/// - A pass that overflows to NaN/inf is discarded and the solve stops with
///   [`Termination::IterationLimit`]; `solution` is the last finite iterate
/// - The first step states whether `A` is diagonally dominant; it never
///   blocks the solve
///
/// # Errors
/// - [`LinearSystemError::UnsupportedSize`] : `n != 3`
/// - [`LinearSystemError::ZeroDiagonal`]    : some `A[i][i] == 0`
pub fn gauss_seidel(
    system: &MatrixSystem,
    cfg: IterativeCfg,
) -> Result<Solution, LinearSystemError> {
    iterate(
        system,
        cfg,
        Algorithm::Iterative(IterativeFamily::GaussSeidel),
        UpdateRule::Immediate,
    )
}

/// Solves a 3×3 system with the
/// [Jacobi method](https://en.wikipedia.org/wiki/Jacobi_method).
///
/// Every component of a pass is computed from the previous pass only.
/// Stopping rule, trace and errors are those of [`gauss_seidel`].
pub fn jacobi(
    system: &MatrixSystem,
    cfg: IterativeCfg,
) -> Result<Solution, LinearSystemError> {
    iterate(
        system,
        cfg,
        Algorithm::Iterative(IterativeFamily::Jacobi),
        UpdateRule::Simultaneous,
    )
}


/// One pass over all three unknowns starting from `x`.
#[inline]
fn sweep(a: &[Vec<f64>], b: &[f64], x: &[f64; SIZE], rule: UpdateRule) -> [f64; SIZE] {
    let mut next = *x;
    for i in 0..SIZE {
        let source = match rule {
            UpdateRule::Immediate    => &next,
            UpdateRule::Simultaneous => x,
        };
        let off: f64 = (0..SIZE)
            .filter(|&j| j != i)
            .map(|j| a[i][j] * source[j])
            .sum();
        next[i] = (b[i] - off) / a[i][i];
    }
    next
}

/// `max_i |next_i - prev_i|`; NaN if any change is NaN.
#[inline]
fn max_change(next: &[f64; SIZE], prev: &[f64; SIZE]) -> f64 {
    next.iter()
        .zip(prev)
        .map(|(new, old)| (new - old).abs())
        .fold(0.0, |acc, d| if d.is_nan() || acc.is_nan() { f64::NAN } else { acc.max(d) })
}


fn iterate(
    system: &MatrixSystem,
    cfg: IterativeCfg,
    algorithm: Algorithm,
    rule: UpdateRule,
) -> Result<Solution, LinearSystemError> {

    let n = system.n();
    if n != SIZE {
        return Err(LinearSystemError::UnsupportedSize { n, expected: SIZE });
    }
    let a = system.matrix();
    let b = system.constants();
    if let Some(row) = (0..SIZE).find(|&i| a[i][i] == 0.0) {
        return Err(LinearSystemError::ZeroDiagonal { row });
    }

    let tol      = cfg.tolerance();
    let max_iter = cfg.max_iter();

    let mut steps = StepRecorder::new();
    if system.is_diagonally_dominant() {
        steps.record(
            "Diagonal Dominance",
            "\\text{Diagonal Dominance Check:}",
            "System is diagonally dominant. Convergence is guaranteed.",
            None,
        );
    } else {
        log::debug!("{algorithm}: system is not diagonally dominant, convergence not guaranteed");
        steps.record(
            "Warning",
            "\\text{Diagonal Dominance Check:}",
            "System is not diagonally dominant. Convergence is not guaranteed.",
            None,
        );
    }
    steps.record("System of Equations", "\\text{Given System:}", system.equations_latex(), None);

    let mut table = IterationTable::new(["Iteration", "x", "y", "z", "Error"]);
    let mut snapshots = Vec::new();

    let mut x = [0.0; SIZE];
    let mut error = f64::INFINITY;
    let mut iterations = 0;
    let mut diverged = false;
    while iterations < max_iter {
        let next = sweep(a, b, &x, rule);
        if next.iter().any(|v| !v.is_finite()) {
            diverged = true;
            break;
        }

        iterations += 1;
        error = max_change(&next, &x);
        x = next;

        snapshots.push(IterationSnapshot { iteration: iterations, x: x[0], y: x[1], z: x[2], error });
        table.push_row(vec![
            iterations.to_string(),
            fx(x[0]), fx(x[1]), fx(x[2]), fx(error),
        ]);
        log::trace!("{algorithm} iter {iterations}: x={x:?}, error={error}");

        if error <= tol {
            break;
        }
    }

    // an overflowing pass is never committed; x holds the last finite iterate
    let termination = if !diverged && error <= tol { Termination::ToleranceReached } else { Termination::IterationLimit };
    let description = if diverged {
        log::debug!("{algorithm}: iterates overflowed after {iterations} iterations");
        format!("Diverged after {iterations} iterations")
    } else if termination == Termination::ToleranceReached {
        format!("Converged after {iterations} iterations")
    } else {
        format!("Did not converge within {iterations} iterations")
    };
    steps.record(
        description,
        "\\text{Final Values:}",
        format!(
            "\\begin{{aligned}} x &= {} \\\\ y &= {} \\\\ z &= {} \\\\ \\text{{Error}} &= {} \\end{{aligned}}",
            fx(x[0]), fx(x[1]), fx(x[2]), fx(error)
        ),
        None,
    );
    log::debug!("{algorithm} finished after {iterations} iterations ({termination:?}): {x:?}");

    let answer = format!(
        "Solution: x = {}, y = {}, z = {} ({iterations} iterations)",
        fx(x[0]), fx(x[1]), fx(x[2])
    );
    Ok(Solution::new(algorithm.title(), steps.into_steps(), answer, termination)
        .with_table(table)
        .with_solution(x.to_vec())
        .with_iterations(iterations)
        .with_iteration_steps(snapshots))
}
