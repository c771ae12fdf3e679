// common helpers
pub mod algorithms;
pub mod errors;
pub mod config;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod false_position;
pub mod secant;
pub mod newton;
