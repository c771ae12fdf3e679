use super::algorithms::{Algorithm, BracketFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::RootFindingError;
use super::signs::{brackets_root, opposite_sign};
use crate::errors::ErrorKind;
use crate::expression::{Evaluator, ExpressionError};
use crate::steps::format::fx;
use crate::steps::{IterationTable, Solution, StepRecorder, Termination};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::FalsePosition);

#[derive(Debug, Error)]
pub enum FalsePositionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("root does not exist within [{a}, {b}]: f(a) * f(b) >= 0 (f(a)={fa}, f(b)={fb})")]
    NoRootInInterval { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("degenerate interval [{a}, {b}]: f(b) - f(a) = 0 (f(a)={fa}, f(b)={fb})")]
    DegenerateInterval { a: f64, b: f64, fa: f64, fb: f64 },
}

impl From<ExpressionError> for FalsePositionError {
    fn from(e: ExpressionError) -> Self { FalsePositionError::Common(e.into()) }
}

impl FalsePositionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FalsePositionError::Common(e)                 => e.kind(),
            FalsePositionError::NoRootInInterval { .. }   => ErrorKind::NoRootInInterval,
            FalsePositionError::InvalidBounds { .. }      => ErrorKind::InvalidInput,
            FalsePositionError::DegenerateInterval { .. } => ErrorKind::DegenerateInterval,
        }
    }
}


/// False position configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `decimal_places` and optional `max_iter`.
///
/// # Construction
/// - Use [`FalsePositionCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone)]
pub struct FalsePositionCfg {
    common: CommonCfg,
}
impl FalsePositionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for FalsePositionCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(FalsePositionCfg);


/// Calculates the x-intercept of the chord through `(a, fa)` and `(b, fb)`.
///
/// # Returns
/// - `Ok(c)` with `c = (a*fb - b*fa) / (fb - fa)`
/// - `Err(DegenerateInterval)` if `fb - fa == 0` or `c` is non-finite
#[inline]
fn chord_intercept(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
) -> Result<f64, FalsePositionError> {
    let denom = fb - fa;
    let c = (a * fb - b * fa) / denom;
    if denom == 0.0 || !c.is_finite() {
        return Err(FalsePositionError::DegenerateInterval { a, b, fa, fb });
    }
    Ok(c)
}


/// Finds a root of `f` using the
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi),
/// recording every chord intercept.
///
/// # Arguments
///
/// ┌ `f`   - The function whose root is to be found.
/// ├ `a`   - Lower bound. Must be finite and less than `b`.
/// ├ `b`   - Upper bound. Must be finite and greater than `a`.
/// └ `cfg` - [`FalsePositionCfg`] (default 2 decimal places, 100 iterations)
///
/// # Behavior
///
/// ├ `c = (a f(b) - b f(a)) / (f(b) - f(a))`, then the bound sharing the sign
/// │ of `f(c)` is replaced.
/// ├ Error is `b - a` on the first pass, `|c - c_prev|` afterwards.
/// └ Stops when `|f(c)| < tol` or the error is `<= tol`.
///
/// Unlike bisection, the stopping test looks at `|f(c)|` as well as the
/// step, not at the bracket width.
///
/// # Errors
///
/// ┌ [`FalsePositionError::InvalidBounds`]      - `a` or `b` is NaN/inf or `a >= b`.
/// ├ [`FalsePositionError::NoRootInInterval`]   - `f(a) * f(b) >= 0`.
/// ├ [`FalsePositionError::DegenerateInterval`] - `f(b) - f(a) == 0` during an update.
/// │
/// │ The following are propagated via [`FalsePositionError::Common`]
/// ├ [`RootFindingError::MaxIterationsExceeded`] - not converged within `max_iter`.
/// └ [`RootFindingError::Expression`]            - `f(x)` failed or was non-finite.
pub fn false_position<E>(
    f: &E,
    mut a: f64,
    mut b: f64,
    cfg: FalsePositionCfg,
) -> Result<Solution, FalsePositionError>
where E: Evaluator + ?Sized {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(FalsePositionError::InvalidBounds { a, b });
    }

    let tol      = cfg.tolerance();
    let max_iter = cfg.common.resolved_max_iter(ALGORITHM);

    let mut fa = f.eval(a)?;
    let mut fb = f.eval(b)?;
    if !brackets_root(fa, fb) {
        return Err(FalsePositionError::NoRootInInterval { a, b, fa, fb });
    }

    let mut steps = StepRecorder::new();
    let mut table = IterationTable::new([
        "$Iteration$", "$a$", "$b$", "$c$", "$f(a)$", "$f(b)$", "$f(c)$", "$Error$",
    ]);

    let mut c      = a;     // gets overwritten
    let mut fc     = fa;    // gets overwritten
    let mut prev_c: Option<f64> = None;
    let mut converged = false;
    for iter in 1..=max_iter {
        c  = chord_intercept((a, fa), (b, fb))?;
        fc = f.eval(c)?;
        let error = prev_c.map_or((b - a).abs(), |p| (c - p).abs());

        steps.record(
            format!("Iteration {iter}"),
            "$\\frac{a\\,f(b)-b\\,f(a)}{f(b)-f(a)}$",
            format!(
                "$c = \\frac{{{a}\\,\\cdot\\,{} - {b}\\,\\cdot\\,{}}}{{{} - {}}} = {}$",
                fx(fb), fx(fa), fx(fb), fx(fa), fx(c)
            ),
            Some(format!("$f(c) = {}, \\quad Error = {}$", fx(fc), fx(error)).into()),
        );
        table.push_row(vec![
            iter.to_string(),
            fx(a), fx(b), fx(c),
            fx(fa), fx(fb), fx(fc),
            fx(error),
        ]);
        log::trace!("false position iter {iter}: c={c}, f(c)={fc}, error={error}");

        if fc.abs() < tol || error <= tol {
            converged = true;
            break;
        }

        if opposite_sign(fa, fc) {
            b  = c;
            fb = fc;
        } else {
            a  = c;
            fa = fc;
        }
        prev_c = Some(c);
    }

    if !converged {
        return Err(RootFindingError::MaxIterationsExceeded { max_iter }.into());
    }

    let iterations  = steps.len();
    let termination = if fc == 0.0 { Termination::ExactRoot } else { Termination::ToleranceReached };
    log::debug!("false position finished after {iterations} iterations: x={c}");

    let answer = format!("x = {} (after {iterations} iterations)", fx(c));
    Ok(Solution::new(ALGORITHM.title(), steps.into_steps(), answer, termination)
        .with_table(table)
        .with_root(c)
        .with_iterations(iterations))
}
