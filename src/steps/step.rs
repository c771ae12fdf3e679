//! Defines the [`Step`] struct recorded by all solvers.

use serde::Serialize;

/// Optional result attached to a step: rendered text or a raw number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StepResult {
    Text(String),
    Number(f64),
}

impl From<String> for StepResult {
    fn from(v: String) -> Self { StepResult::Text(v) }
}
impl From<&str> for StepResult {
    fn from(v: &str) -> Self { StepResult::Text(v.to_string()) }
}
impl From<f64> for StepResult {
    fn from(v: f64) -> Self { StepResult::Number(v) }
}

/// One entry of a solver trace.
///
/// [`Step`]
/// - `index`       : position in the trace, starting at 1
/// - `description` : what happened (e.g. `"Iteration 3"`)
/// - `formula`     : LaTeX template of the rule applied
/// - `calculation` : the formula with the current values substituted
/// - `result`      : optional outcome of the calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub index:       usize,
    pub description: String,
    pub formula:     String,
    pub calculation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result:      Option<StepResult>,
}

/// Builds a [`Step`]. Pure; performs no validation.
pub fn create_step(
    index: usize,
    description: impl Into<String>,
    formula: impl Into<String>,
    calculation: impl Into<String>,
    result: Option<StepResult>,
) -> Step {
    Step {
        index,
        description: description.into(),
        formula:     formula.into(),
        calculation: calculation.into(),
        result,
    }
}
