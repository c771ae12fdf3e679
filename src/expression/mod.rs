//! Expression evaluation for the root-finding solvers.
//!
//! ┌ [`evaluate`]             : one-shot evaluation with named bindings
//! ├ [`numerical_derivative`] : central difference of a one-shot expression
//! ├ [`Evaluator`]            : the seam every root-finding solver is generic over
//! └ [`Expression`]           : parsed, reusable `f(x)` backed by `meval`

pub mod errors;
pub mod evaluator;

pub use errors::ExpressionError;
pub use evaluator::{evaluate, numerical_derivative, Evaluator, Expression, DEFAULT_DERIVATIVE_STEP};
