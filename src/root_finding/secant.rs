use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::RootFindingError;
use crate::errors::ErrorKind;
use crate::expression::{Evaluator, ExpressionError};
use crate::steps::format::fx;
use crate::steps::{IterationTable, Solution, StepRecorder, Termination};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);


#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid initial guesses: x0 and x1 must be finite and distinct. got x0={x0}, x1={x1}")]
    InvalidInitialGuess { x0: f64, x1: f64 },

    #[error("division by zero: f(x1) - f(x0) is zero at x0={x0}, x1={x1}")]
    DivisionByZero { x0: f64, x1: f64 },
}

impl From<ExpressionError> for SecantError {
    fn from(e: ExpressionError) -> Self { SecantError::RootFinding(e.into()) }
}

impl SecantError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SecantError::RootFinding(e)             => e.kind(),
            SecantError::InvalidInitialGuess { .. } => ErrorKind::InvalidInitialGuess,
            SecantError::DivisionByZero { .. }      => ErrorKind::DivisionByZero,
        }
    }
}


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `decimal_places` and optional `max_iter`.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
///
/// # Defaults
/// - If `max_iter` is `None`, [`secant`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Secant`] (100).
#[derive(Debug, Copy, Clone)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl Default for SecantCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SecantCfg);


/// `x0` and `x1` must be finite and distinct.
#[inline]
pub(crate) fn check_initial_guesses(x0: f64, x1: f64) -> Result<(), SecantError> {
    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return Err(SecantError::InvalidInitialGuess { x0, x1 });
    }
    Ok(())
}


/// Calculates the secant x-intercept for the line
/// connecting `(x0, fx0)` and `(x1, fx1)`
///
/// # Returns
/// - `Ok(x2)`                  : `x1 - fx1 (x1 - x0) / (fx1 - fx0)`
/// - `Err(DivisionByZero)`     : if `fx1 - fx0 == 0` or the step is non-finite
#[inline]
pub(crate) fn calculate_secant_x_intercept(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
) -> Result<f64, SecantError> {
    let denom = fx1 - fx0;
    if denom == 0.0 {
        return Err(SecantError::DivisionByZero { x0, x1 });
    }

    let x2 = x1 - fx1 * (x1 - x0) / denom;
    if !x2.is_finite() {
        return Err(SecantError::DivisionByZero { x0, x1 });
    }
    Ok(x2)
}


/// Finds a root of `f` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method),
/// recording every update.
///
/// # Arguments
/// - `f`   : The function whose root is to be found
/// - `x0`  : First initial guess.  Must be finite and not equal to `x1`
/// - `x1`  : Second initial guess. Must be finite and not equal to `x0`
/// - `cfg` : [`SecantCfg`] (default 2 decimal places, 100 iterations)
///
/// # Behavior
/// - Update: `x2 = x1 - f(x1) (x1 - x0) / (f(x1) - f(x0))`
/// - Stops on an exact root (`f(x2) == 0`) or when `|x2 - x1| <= tol`
/// - The denominator is checked before every update, the first one included
///
/// # Errors
/// - [`SecantError::InvalidInitialGuess`] : `x0` or `x1` is NaN/inf or equal;
///   raised before anything is evaluated
/// - [`SecantError::DivisionByZero`]      : `f(x1) - f(x0) == 0`
///
/// * Propagated via [`SecantError::RootFinding`]
/// - [`RootFindingError::MaxIterationsExceeded`] : no convergence within `max_iter`
/// - [`RootFindingError::Expression`]            : `f(x)` failed or was non-finite
///
/// # Warning
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn secant<E>(
    f: &E,
    x0: f64,
    x1: f64,
    cfg: SecantCfg,
) -> Result<Solution, SecantError>
where E: Evaluator + ?Sized {

    check_initial_guesses(x0, x1)?;

    let tol      = cfg.tolerance();
    let max_iter = cfg.common.resolved_max_iter(ALGORITHM);

    let mut steps = StepRecorder::new();
    let mut table = IterationTable::new([
        "$Iteration$", "$x_0$", "$x_1$", "$x_2$", "$f(x_0)$", "$f(x_1)$", "$f(x_2)$",
    ]);

    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = f.eval(x_prev)?;
    let mut f_curr = f.eval(x_curr)?;

    for iter in 1..=max_iter {
        let x_next = calculate_secant_x_intercept((x_prev, f_prev), (x_curr, f_curr))?;
        let f_next = f.eval(x_next)?;

        steps.record(
            format!("Iteration {iter}"),
            "$x_2 = x_1 - \\frac{f(x_1) (x_1 - x_0)}{f(x_1) - f(x_0)}$",
            format!(
                "$x_2 = {} - \\frac{{{} ( {} - {} )}}{{{} - {}}} = {}$",
                fx(x_curr), fx(f_curr), fx(x_curr), fx(x_prev), fx(f_curr), fx(f_prev), fx(x_next)
            ),
            Some(format!("$f(x_2) = {}$", fx(f_next)).into()),
        );
        table.push_row(vec![
            iter.to_string(),
            fx(x_prev), fx(x_curr), fx(x_next),
            fx(f_prev), fx(f_curr), fx(f_next),
        ]);
        log::trace!("secant iter {iter}: x2={x_next}, f(x2)={f_next}");

        let termination = if f_next == 0.0 {
            Some(Termination::ExactRoot)
        } else if (x_next - x_curr).abs() <= tol {
            Some(Termination::ToleranceReached)
        } else {
            None
        };

        if let Some(termination) = termination {
            log::debug!("secant finished after {iter} iterations: x={x_next}");
            let answer = format!("x = {} (after {iter} iterations)", fx(x_next));
            return Ok(Solution::new(ALGORITHM.title(), steps.into_steps(), answer, termination)
                .with_table(table)
                .with_root(x_next)
                .with_iterations(iter));
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f_next;
    }

    Err(RootFindingError::MaxIterationsExceeded { max_iter }.into())
}
