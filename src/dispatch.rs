//! Method identifier + parameter bag -> solver.
//!
//! [`MethodParams`] mirrors the JSON a form submits (camelCase keys); each
//! method reads the fields it needs and ignores the rest.
//!
//! | method              | required                           | optional (default)                      |
//! |---------------------|------------------------------------|-----------------------------------------|
//! | `bisection`         | `function`, `lowerBound`, `upperBound` | `tolerance` (2), `maxIterations` (100), `bestEffort` |
//! | `false-position`    | `function`, `lowerBound`, `upperBound` | `tolerance` (2), `maxIterations` (100)  |
//! | `secant`            | `function`, `x0`, `x1`             | `decimalPlaces` (2), `maxIterations` (100) |
//! | `newton-raphson`    | `function`, `initialGuess`         | `tolerance` (2), `maxIterations` (10)   |
//! | `gauss-elimination` | `matrix`, `constants`              |                                         |
//! | `gauss-jordan`      | `matrix`, `constants`              |                                         |
//! | `gauss-seidel`      | `matrix`, `constants`              | `decimalPlaces` (3), `maxIterations` (100) |
//! | `jacobi`            | `matrix`, `constants`              | `decimalPlaces` (3), `maxIterations` (100) |
//!
//! `tolerance` and `decimalPlaces` both give a count of decimal places, not an
//! absolute tolerance. If both are present `decimalPlaces` is used.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::errors::ErrorKind;
use crate::expression::{Expression, ExpressionError};
use crate::linear_systems::config::IterativeCfg;
use crate::linear_systems::{elimination, iterative, LinearSystemError, MatrixSystem};
use crate::root_finding::bisection::{bisection, BisectionCfg, BisectionError, ConvergencePolicy};
use crate::root_finding::errors::RootFindingError;
use crate::root_finding::false_position::{false_position, FalsePositionCfg, FalsePositionError};
use crate::root_finding::newton::{newton, NewtonCfg, NewtonError};
use crate::root_finding::secant::{check_initial_guesses, secant, SecantCfg, SecantError};
use crate::steps::Solution;


#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Bisection,
    FalsePosition,
    Secant,
    NewtonRaphson,
    GaussElimination,
    GaussJordan,
    GaussSeidel,
    Jacobi,
}

impl Method {
    pub const ALL: [Method; 8] = [
        Method::Bisection,
        Method::FalsePosition,
        Method::Secant,
        Method::NewtonRaphson,
        Method::GaussElimination,
        Method::GaussJordan,
        Method::GaussSeidel,
        Method::Jacobi,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Method::Bisection        => "bisection",
            Method::FalsePosition    => "false-position",
            Method::Secant           => "secant",
            Method::NewtonRaphson    => "newton-raphson",
            Method::GaussElimination => "gauss-elimination",
            Method::GaussJordan      => "gauss-jordan",
            Method::GaussSeidel      => "gauss-seidel",
            Method::Jacobi           => "jacobi",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Method {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Method::ALL
            .into_iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| SolveError::UnknownMethod(id.to_string()))
    }
}


/// Parameter bag accepted by [`solve`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MethodParams {
    pub function:       Option<String>,
    pub lower_bound:    Option<f64>,
    pub upper_bound:    Option<f64>,
    pub x0:             Option<f64>,
    pub x1:             Option<f64>,
    pub initial_guess:  Option<f64>,
    pub decimal_places: Option<u32>,
    pub tolerance:      Option<u32>,
    pub max_iterations: Option<usize>,
    pub matrix:         Option<Vec<Vec<f64>>>,
    pub constants:      Option<Vec<f64>>,
    pub best_effort:    bool,
}

impl MethodParams {
    /// Requested decimal places; `decimalPlaces` wins when both keys are sent.
    pub fn precision(&self) -> Option<u32> {
        self.decimal_places.or(self.tolerance)
    }
}


#[derive(Debug, Error)]
pub enum SolveError {
    #[error("method `{0}` is not implemented")]
    UnknownMethod(String),

    #[error("{method}: missing required parameter `{name}`")]
    MissingParameter { method: Method, name: &'static str },

    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] serde_json::Error),

    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Bisection(#[from] BisectionError),

    #[error(transparent)]
    FalsePosition(#[from] FalsePositionError),

    #[error(transparent)]
    Secant(#[from] SecantError),

    #[error(transparent)]
    Newton(#[from] NewtonError),

    #[error(transparent)]
    LinearSystem(#[from] LinearSystemError),
}

impl SolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SolveError::UnknownMethod(_)
            | SolveError::MissingParameter { .. }
            | SolveError::InvalidParameters(_) => ErrorKind::InvalidInput,
            SolveError::Expression(e)          => e.kind(),
            SolveError::RootFinding(e)         => e.kind(),
            SolveError::Bisection(e)           => e.kind(),
            SolveError::FalsePosition(e)       => e.kind(),
            SolveError::Secant(e)              => e.kind(),
            SolveError::Newton(e)              => e.kind(),
            SolveError::LinearSystem(e)        => e.kind(),
        }
    }
}


#[inline]
fn require<T: Clone>(method: Method, name: &'static str, value: &Option<T>) -> Result<T, SolveError> {
    value.clone().ok_or(SolveError::MissingParameter { method, name })
}

fn function(method: Method, params: &MethodParams) -> Result<Expression, SolveError> {
    let src = params
        .function
        .as_deref()
        .ok_or(SolveError::MissingParameter { method, name: "function" })?;
    Ok(Expression::parse(src)?)
}

fn system(method: Method, params: &MethodParams) -> Result<MatrixSystem, SolveError> {
    let a = require(method, "matrix", &params.matrix)?;
    let b = require(method, "constants", &params.constants)?;
    Ok(MatrixSystem::new(a, b)?)
}

/// Applies `decimalPlaces`/`maxIterations` through a config's setters.
macro_rules! apply_common {
    ($cfg:expr, $params:expr) => {{
        let mut cfg = $cfg;
        if let Some(dp) = $params.precision() {
            cfg = cfg.set_decimal_places(dp)?;
        }
        if let Some(max) = $params.max_iterations {
            cfg = cfg.set_max_iter(max)?;
        }
        cfg
    }};
}


/// Runs `method` with `params`.
///
/// # Errors
/// - [`SolveError::UnknownMethod`]    : `method` is not one of [`Method::ALL`]
/// - [`SolveError::MissingParameter`] : a required field is absent
/// - any solver, config or expression error, wrapped transparently
pub fn solve(method: &str, params: &MethodParams) -> Result<Solution, SolveError> {
    solve_method(method.parse()?, params)
}

/// [`solve`] with the parameter bag given as JSON.
///
/// # Errors
/// - [`SolveError::InvalidParameters`] : `json` is not a valid parameter object
/// - everything [`solve`] returns
pub fn solve_json(method: &str, json: &str) -> Result<Solution, SolveError> {
    let method: Method = method.parse()?;
    let params: MethodParams = serde_json::from_str(json)?;
    solve_method(method, &params)
}

pub fn solve_method(method: Method, params: &MethodParams) -> Result<Solution, SolveError> {
    log::debug!("dispatching {method}");

    let solution = match method {
        Method::Bisection => {
            let f = function(method, params)?;
            let a = require(method, "lowerBound", &params.lower_bound)?;
            let b = require(method, "upperBound", &params.upper_bound)?;
            let policy = if params.best_effort { ConvergencePolicy::BestEffort } else { ConvergencePolicy::FailFast };
            let cfg = apply_common!(BisectionCfg::new().with_policy(policy), params);
            bisection(&f, a, b, cfg)?
        }
        Method::FalsePosition => {
            let f = function(method, params)?;
            let a = require(method, "lowerBound", &params.lower_bound)?;
            let b = require(method, "upperBound", &params.upper_bound)?;
            let cfg = apply_common!(FalsePositionCfg::new(), params);
            false_position(&f, a, b, cfg)?
        }
        Method::Secant => {
            let x0 = require(method, "x0", &params.x0)?;
            let x1 = require(method, "x1", &params.x1)?;
            check_initial_guesses(x0, x1)?;
            let f  = function(method, params)?;
            let cfg = apply_common!(SecantCfg::new(), params);
            secant(&f, x0, x1, cfg)?
        }
        Method::NewtonRaphson => {
            let f  = function(method, params)?;
            let x0 = require(method, "initialGuess", &params.initial_guess)?;
            let cfg = apply_common!(NewtonCfg::new(), params);
            newton(&f, x0, cfg)?
        }
        Method::GaussElimination => elimination::gauss_elimination(&system(method, params)?)?,
        Method::GaussJordan      => elimination::gauss_jordan(&system(method, params)?)?,
        Method::GaussSeidel => {
            let cfg = apply_common!(IterativeCfg::new(), params);
            iterative::gauss_seidel(&system(method, params)?, cfg)?
        }
        Method::Jacobi => {
            let cfg = apply_common!(IterativeCfg::new(), params);
            iterative::jacobi(&system(method, params)?, cfg)?
        }
    };

    Ok(solution)
}
