// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod system;

// algorithms
pub mod elimination;
pub mod iterative;

pub use errors::LinearSystemError;
pub use system::MatrixSystem;
