//! Defines the [`Solution`] struct returned by all solvers.

use serde::Serialize;

use super::step::Step;
use super::table::IterationTable;

/// Why a solver stopped.
///
/// - [`Termination::ToleranceReached`] : convergence criterion satisfied
/// - [`Termination::ExactRoot`]        : `f(x) == 0` hit exactly
/// - [`Termination::IterationLimit`]   : cap reached without convergence
///   (only reported by solvers that treat the cap as non-fatal)
/// - [`Termination::Completed`]        : direct method finished
/// - [`Termination::NoRootInInterval`] : diagnostic result for an invalid bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Termination {
    ToleranceReached,
    ExactRoot,
    IterationLimit,
    Completed,
    NoRootInInterval,
}

/// Raw per-iteration values of the 3×3 iterative solvers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IterationSnapshot {
    pub iteration: usize,
    pub x:         f64,
    pub y:         f64,
    pub z:         f64,
    pub error:     f64,
}

/// Final report returned by all solvers.
///
/// [`Solution`]
/// - `title`           : e.g. `"Bisection Method Solution"`
/// - `steps`           : ordered trace, indices `1..=steps.len()`
/// - `iteration_table` : tabular view of the trace
/// - `final_answer`    : human-readable answer
/// - `termination`     : why the solver stopped ([`Termination`])
/// - `root`            : root estimate (root-finding)
/// - `solution`        : one value per unknown (linear systems)
/// - `iterations`      : iterations performed (iterative methods)
/// - `iteration_steps` : raw snapshots (Gauss-Seidel, Jacobi)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub title:           String,
    pub steps:           Vec<Step>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_table: Option<IterationTable>,
    pub final_answer:    String,
    pub termination:     Termination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root:            Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution:        Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations:      Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_steps: Option<Vec<IterationSnapshot>>,
}

impl Solution {
    pub fn new(
        title: impl Into<String>,
        steps: Vec<Step>,
        final_answer: impl Into<String>,
        termination: Termination,
    ) -> Self {
        Self {
            title: title.into(),
            steps,
            iteration_table: None,
            final_answer: final_answer.into(),
            termination,
            root: None,
            solution: None,
            iterations: None,
            iteration_steps: None,
        }
    }

    pub fn with_table(mut self, table: IterationTable) -> Self { self.iteration_table = Some(table); self }
    pub fn with_root(mut self, root: f64) -> Self { self.root = Some(root); self }
    pub fn with_solution(mut self, v: Vec<f64>) -> Self { self.solution = Some(v); self }
    pub fn with_iterations(mut self, n: usize) -> Self { self.iterations = Some(n); self }
    pub fn with_iteration_steps(mut self, v: Vec<IterationSnapshot>) -> Self { self.iteration_steps = Some(v); self }

    /// `true` unless the solver stopped at its cap or on an invalid bracket.
    pub fn converged(&self) -> bool {
        !matches!(self.termination, Termination::IterationLimit | Termination::NoRootInInterval)
    }
}
