use super::algorithms::{Algorithm, BracketFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::RootFindingError;
use super::signs::{brackets_root, opposite_sign};
use crate::errors::ErrorKind;
use crate::expression::{Evaluator, ExpressionError};
use crate::steps::format::{fx, truncate_chars};
use crate::steps::{IterationTable, Solution, StepRecorder, Termination};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);

const TABLE_HEADER: [&str; 8] = ["Iteration", "a", "b", "c", "f(a)", "f(b)", "f(c)", "Error"];

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("no root guaranteed in [{a}, {b}]: f(a) * f(b) >= 0 (f(a)={fa}, f(b)={fb})")]
    NoRootInInterval { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}

impl From<ExpressionError> for BisectionError {
    fn from(e: ExpressionError) -> Self { BisectionError::Common(e.into()) }
}

impl BisectionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BisectionError::Common(e)               => e.kind(),
            BisectionError::NoRootInInterval { .. } => ErrorKind::NoRootInInterval,
            BisectionError::InvalidBounds { .. }    => ErrorKind::InvalidInput,
        }
    }
}


/// What bisection does when it cannot finish cleanly.
///
/// - [`ConvergencePolicy::FailFast`]   : invalid bracket -> [`BisectionError::NoRootInInterval`],
///   cap reached before the width tolerance -> [`RootFindingError::MaxIterationsExceeded`]
/// - [`ConvergencePolicy::BestEffort`] : invalid bracket -> one-step diagnostic solution,
///   cap reached -> one extra final midpoint is reported as the answer
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ConvergencePolicy {
    #[default]
    FailFast,
    BestEffort,
}


/// Bisection configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `decimal_places` and optional `max_iter`.
/// - `policy` : [`ConvergencePolicy`], [`ConvergencePolicy::FailFast`] by default.
///
/// # Construction
/// - Use [`BisectionCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
    policy: ConvergencePolicy,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            policy: ConvergencePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ConvergencePolicy) -> Self { self.policy = policy; self }

    #[inline] #[must_use] pub fn policy(&self) -> ConvergencePolicy { self.policy }
}
impl Default for BisectionCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BisectionCfg);


/// Values shown for one bisection pass.
#[derive(Debug, Copy, Clone)]
struct Pass {
    iter:  usize,
    a:     f64,
    b:     f64,
    c:     f64,
    fa:    f64,
    fb:    f64,
    fc:    f64,
    error: f64,
}

fn record_pass(steps: &mut StepRecorder, table: &mut IterationTable, label: &str, p: Pass) {
    steps.record(
        format!("{label} {}", p.iter),
        "$$c = \\frac{a + b}{2}$$",
        format!("$$c = \\frac{{{} + {}}}{{2}} = {}$$", fx(p.a), fx(p.b), fx(p.c)),
        Some(format!(
            "$$f(a) = {}$$\n$$f(b) = {}$$\n$$f(c) = {}$$",
            fx(p.fa), fx(p.fb), fx(p.fc)
        ).into()),
    );
    table.push_row(vec![
        p.iter.to_string(),
        fx(p.a), fx(p.b), fx(p.c),
        fx(p.fa), fx(p.fb), fx(p.fc),
        fx(p.error),
    ]);
}

fn no_root_diagnostic(a: f64, b: f64, fa: f64, fb: f64) -> Solution {
    let mut steps = StepRecorder::new();
    steps.record(
        "No root guaranteed in the given interval",
        "$f(a) \\cdot f(b) < 0$",
        format!("$f({a}) = {fa:.6}, f({b}) = {fb:.6}$"),
        Some("Interval is invalid for the bisection method.".into()),
    );

    Solution::new(
        ALGORITHM.title(),
        steps.into_steps(),
        format!("No root guaranteed in the interval [{a}, {b}]"),
        Termination::NoRootInInterval,
    )
    .with_iterations(0)
}


/// Finds a root of `f` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method),
/// recording every midpoint.
///
/// # Arguments
///
/// ┌ `f`   - The function whose root is to be found.
/// ├ `a`   - Lower bound of the search interval. Must be finite and less than `b`.
/// ├ `b`   - Upper bound of the search interval. Must be finite and greater than `a`.
/// └ `cfg` - [`BisectionCfg`]
///    Defaults:
///    ├ decimal_places = 2    (tolerance 0.005)
///    ├ max_iter       = 100
///    └ policy         = FailFast
///
/// # Behavior
///
/// ├ Loops while `(b - a) > 2 * tol` and the cap is not reached:
/// │   ├ `c = (a + b) / 2`, one step and one table row per pass (error = `b - a`)
/// │   ├ `f(c) == 0` stops immediately with [`Termination::ExactRoot`]
/// │   └ the bound sharing the sign of `f(c)` is replaced
/// └ Otherwise one final midpoint of the last bracket is recorded and returned,
///   its error being the distance to the previous midpoint.
///
/// # Returns
///
/// [`Solution`] with `root`, `iterations`, the iteration table and
/// `final_answer` = `x = <root, first decimal_places + 2 chars> (after N iterations)`.
///
/// # Errors
///
/// ┌ [`BisectionError::InvalidBounds`]    - `a` or `b` is NaN/inf or `a >= b`.
/// ├ [`BisectionError::NoRootInInterval`] - `f(a) * f(b) >= 0` under [`ConvergencePolicy::FailFast`].
/// │
/// │ The following are propagated via [`BisectionError::Common`]
/// ├ [`RootFindingError::MaxIterationsExceeded`] - width tolerance not met within `max_iter`
/// │                                               under [`ConvergencePolicy::FailFast`].
/// └ [`RootFindingError::Expression`]            - `f(x)` failed or was non-finite.
pub fn bisection<E>(
    f: &E,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg,
) -> Result<Solution, BisectionError>
where E: Evaluator + ?Sized {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let tol      = cfg.tolerance();
    let max_iter = cfg.common.resolved_max_iter(ALGORITHM);
    let policy   = cfg.policy();

    let mut fa = f.eval(a)?;
    let mut fb = f.eval(b)?;

    if !brackets_root(fa, fb) {
        return match policy {
            ConvergencePolicy::FailFast   => Err(BisectionError::NoRootInInterval { a, b, fa, fb }),
            ConvergencePolicy::BestEffort => {
                log::debug!("bisection: no sign change on [{a}, {b}], returning diagnostic");
                Ok(no_root_diagnostic(a, b, fa, fb))
            }
        };
    }

    let mut steps = StepRecorder::new();
    let mut table = IterationTable::new(TABLE_HEADER);

    let mut iter = 0;
    let mut prev_c: Option<f64> = None;
    let mut exact: Option<f64>  = None;
    while b - a > 2.0 * tol && iter < max_iter {
        iter += 1;
        let c  = 0.5 * (a + b);
        let fc = f.eval(c)?;
        record_pass(&mut steps, &mut table, "Iteration", Pass { iter, a, b, c, fa, fb, fc, error: b - a });
        log::trace!("bisection iter {iter}: a={a}, b={b}, c={c}, f(c)={fc}");

        prev_c = Some(c);
        if fc == 0.0 {
            exact = Some(c);
            break;
        }

        if opposite_sign(fa, fc) {
            b  = c;
            fb = fc;
        } else {
            a  = c;
            fa = fc;
        }
    }

    let (root, termination) = match exact {
        Some(c) => (c, Termination::ExactRoot),
        None => {
            let width_met = b - a <= 2.0 * tol;
            if !width_met && policy == ConvergencePolicy::FailFast {
                return Err(RootFindingError::MaxIterationsExceeded { max_iter }.into());
            }

            // final midpoint of the last bracket
            iter += 1;
            let c     = 0.5 * (a + b);
            let fc    = f.eval(c)?;
            let error = prev_c.map_or(b - a, |p| (c - p).abs());
            record_pass(&mut steps, &mut table, "Final Iteration", Pass { iter, a, b, c, fa, fb, fc, error });

            let termination = if fc == 0.0 {
                Termination::ExactRoot
            } else if width_met {
                Termination::ToleranceReached
            } else {
                Termination::IterationLimit
            };
            (c, termination)
        }
    };

    log::debug!("bisection finished after {iter} iterations: x={root} ({termination:?})");

    let answer = format!(
        "x = {} (after {iter} iterations)",
        truncate_chars(root, cfg.decimal_places() as usize + 2)
    );
    Ok(Solution::new(ALGORITHM.title(), steps.into_steps(), answer, termination)
        .with_table(table)
        .with_root(root)
        .with_iterations(iter))
}
