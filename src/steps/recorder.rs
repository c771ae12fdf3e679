//! Append-only step sequence.

use super::step::{create_step, Step, StepResult};

/// Owns the trace of one solve call.
///
/// Indices are assigned on [`StepRecorder::record`] as `len + 1`, so the
/// sequence is always 1-indexed and gap-free. There is no way to remove or
/// edit a recorded step.
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Appends a step and returns its index.
    pub fn record(
        &mut self,
        description: impl Into<String>,
        formula: impl Into<String>,
        calculation: impl Into<String>,
        result: Option<StepResult>,
    ) -> usize {
        let index = self.steps.len() + 1;
        self.steps.push(create_step(index, description, formula, calculation, result));
        index
    }

    pub fn len(&self) -> usize { self.steps.len() }
    pub fn is_empty(&self) -> bool { self.steps.is_empty() }
    pub fn steps(&self) -> &[Step] { &self.steps }

    pub fn into_steps(self) -> Vec<Step> { self.steps }
}
