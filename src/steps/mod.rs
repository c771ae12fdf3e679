//! Step recording shared by every solver.
//!
//! ┌ [`Step`]           : one recorded unit of progress
//! ├ [`StepRecorder`]   : append-only, 1-indexed step sequence
//! ├ [`IterationTable`] : header row + formatted rows
//! ├ [`Solution`]       : what every solver returns
//! └ [`format`]         : number formatting used in steps and tables

pub mod format;
pub mod recorder;
pub mod solution;
pub mod step;
pub mod table;

pub use recorder::StepRecorder;
pub use solution::{IterationSnapshot, Solution, Termination};
pub use step::{create_step, Step, StepResult};
pub use table::IterationTable;
