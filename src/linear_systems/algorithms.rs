//! Linear-system algorithm definitions.

/// Linear-system algorithm variants.
/// - [`Algorithm::Direct`]    : row reduction of the augmented matrix
/// - [`Algorithm::Iterative`] : fixed-point iteration on a 3×3 system
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Direct(DirectFamily),
    Iterative(IterativeFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DirectFamily {
    GaussElimination,
    GaussJordan,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterativeFamily {
    GaussSeidel,
    Jacobi,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Direct(DirectFamily::GaussElimination) => "gauss-elimination",
            Algorithm::Direct(DirectFamily::GaussJordan)      => "gauss-jordan",
            Algorithm::Iterative(IterativeFamily::GaussSeidel) => "gauss-seidel",
            Algorithm::Iterative(IterativeFamily::Jacobi)      => "jacobi",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Algorithm::Direct(DirectFamily::GaussElimination) => "Gauss Elimination Method Solution",
            Algorithm::Direct(DirectFamily::GaussJordan)      => "Gauss-Jordan Method Solution",
            Algorithm::Iterative(IterativeFamily::GaussSeidel) => "Gauss-Seidel Method Solution",
            Algorithm::Iterative(IterativeFamily::Jacobi)      => "Jacobi Method Solution",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
