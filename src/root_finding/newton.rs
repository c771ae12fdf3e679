//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::RootFindingError;
use crate::errors::ErrorKind;
use crate::expression::{Evaluator, ExpressionError, DEFAULT_DERIVATIVE_STEP};
use crate::steps::format::fx;
use crate::steps::{IterationTable, Solution, StepRecorder, Termination};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidInitialGuess { x0: f64 },

    #[error("derivative is zero at x={x}")]
    ZeroDerivative { x: f64 },

    #[error("invalid derivative step: h={h} must be finite and > 0")]
    InvalidDerivativeStep { h: f64 },
}

impl From<ExpressionError> for NewtonError {
    fn from(e: ExpressionError) -> Self { NewtonError::RootFinding(e.into()) }
}

impl NewtonError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NewtonError::RootFinding(e)               => e.kind(),
            NewtonError::InvalidInitialGuess { .. }   => ErrorKind::InvalidInitialGuess,
            NewtonError::ZeroDerivative { .. }        => ErrorKind::ZeroDerivative,
            NewtonError::InvalidDerivativeStep { .. } => ErrorKind::InvalidInput,
        }
    }
}


/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `decimal_places` and optional `max_iter`.
/// - `h`      : central-difference step for `f'(x)` (default [`DEFAULT_DERIVATIVE_STEP`]).
///
/// # Defaults
/// - If `max_iter` is `None`, [`newton`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Newton`] (10).
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
    h: f64,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            h: DEFAULT_DERIVATIVE_STEP,
        }
    }

    pub fn set_derivative_step(mut self, h: f64) -> Result<Self, NewtonError> {
        if !h.is_finite() || h <= 0.0 {
            return Err(NewtonError::InvalidDerivativeStep { h });
        }
        self.h = h;
        Ok(self)
    }

    #[inline] #[must_use] pub fn derivative_step(&self) -> f64 { self.h }
}
impl Default for NewtonCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg);


/// Finds a root of `f` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method),
/// recording every update.
///
/// `f'(x)` is always the central finite difference
/// `(f(x + h) - f(x - h)) / 2h` supplied by the [`Evaluator`].
///
/// # Arguments
/// - `f`   : function whose root is sought
/// - `x0`  : finite initial guess
/// - `cfg` : [`NewtonCfg`] (default 2 decimal places, 10 iterations, `h = 1e-4`)
///
/// # Behavior
/// - Update: `x_next = x_n - f(x_n) / f'(x_n)`
/// - Stops when `|x_next - x_n| <= tol`
///
/// # Errors
/// - [`NewtonError::InvalidInitialGuess`] : `x0` non-finite
/// - [`NewtonError::ZeroDerivative`]      : `f'(x_n) == 0`
///
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::MaxIterationsExceeded`] : no convergence within `max_iter`
/// - [`RootFindingError::Expression`]            : `f(x)` failed or was non-finite
///
/// # Notes
/// - Convergence is *local only* and depends on a good initial guess `x0`.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn newton<E>(
    f: &E,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<Solution, NewtonError>
where E: Evaluator + ?Sized {

    if !x0.is_finite() {
        return Err(NewtonError::InvalidInitialGuess { x0 });
    }

    let tol      = cfg.tolerance();
    let max_iter = cfg.common.resolved_max_iter(ALGORITHM);
    let h        = cfg.h;

    let mut steps = StepRecorder::new();
    let mut table = IterationTable::new([
        "$Iteration$", "$x_n$", "$f(x_n)$", "$f'(x_n)$", "$x_{next}$", "$f(x_{next})$",
    ]);

    let mut x = x0;
    for iter in 1..=max_iter {
        let fx_n  = f.eval(x)?;
        let dfx_n = f.derivative(x, h)?;
        if dfx_n == 0.0 {
            return Err(NewtonError::ZeroDerivative { x });
        }

        let x_next = x - fx_n / dfx_n;
        let f_next = f.eval(x_next)?;

        steps.record(
            format!("Iteration {iter}"),
            "$x_{next} = x_{n} - \\frac{f(x_{n})}{f'(x_{n})}$",
            format!(
                "$x_{{next}} = {} - \\frac{{{}}}{{{}}} = {}$",
                fx(x), fx(fx_n), fx(dfx_n), fx(x_next)
            ),
            Some(format!("$f(x_{{next}}) = {}$", fx(f_next)).into()),
        );
        table.push_row(vec![
            iter.to_string(),
            fx(x), fx(fx_n), fx(dfx_n), fx(x_next), fx(f_next),
        ]);
        log::trace!("newton iter {iter}: x={x}, f'(x)={dfx_n}, x_next={x_next}");

        if (x_next - x).abs() <= tol {
            let termination = if f_next == 0.0 { Termination::ExactRoot } else { Termination::ToleranceReached };
            log::debug!("newton-raphson finished after {iter} iterations: x={x_next}");

            let answer = format!("x = {} (after {iter} iterations)", fx(x_next));
            return Ok(Solution::new(ALGORITHM.title(), steps.into_steps(), answer, termination)
                .with_table(table)
                .with_root(x_next)
                .with_iterations(iter));
        }

        x = x_next;
    }

    Err(RootFindingError::MaxIterationsExceeded { max_iter }.into())
}
