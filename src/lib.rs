//! Numerical methods that show their work.
//!
//! Every solver returns a [`steps::Solution`]: the answer plus an ordered,
//! append-only trace of [`steps::Step`]s (formula, substituted calculation,
//! intermediate result) and, where it applies, an iteration table.
//!
//! ┌ [`root_finding`]   : bisection, false position, secant, newton-raphson
//! ├ [`linear_systems`] : gauss elimination, gauss-jordan, gauss-seidel, jacobi
//! ├ [`expression`]     : evaluator contract used by the root-finding solvers
//! ├ [`steps`]          : step recorder, iteration table, solution
//! └ [`dispatch`]       : method name + parameter bag -> solver

pub mod errors;
pub mod expression;
pub mod steps;

pub mod root_finding;
pub mod linear_systems;

pub mod dispatch;

pub use errors::ErrorKind;
pub use steps::{Solution, Step, Termination};
