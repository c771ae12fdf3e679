//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! with their default iteration caps, identifiers and display titles.


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
    FalsePosition,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    Secant,
    Newton,
}

impl Algorithm {
    /// Iteration cap used when `max_iter` is unset in config.
    ///
    /// Newton-Raphson is deliberately capped lower than the others.
    pub const fn default_max_iter(self) -> usize {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)     => 100,
            Algorithm::Bracket(BracketFamily::FalsePosition) => 100,
            Algorithm::Open(OpenFamily::Secant)              => 100,
            Algorithm::Open(OpenFamily::Newton)              => 10,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)     => "bisection",
            Algorithm::Bracket(BracketFamily::FalsePosition) => "false-position",
            Algorithm::Open(OpenFamily::Secant)              => "secant",
            Algorithm::Open(OpenFamily::Newton)              => "newton-raphson",
        }
    }

    /// Title of the [`crate::steps::Solution`] produced by the method.
    pub const fn title(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)     => "Bisection Method Solution",
            Algorithm::Bracket(BracketFamily::FalsePosition) => "False Position Method Solution",
            Algorithm::Open(OpenFamily::Secant)              => "Secant Method Solution",
            Algorithm::Open(OpenFamily::Newton)              => "Newton-Raphson Method Solution",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
