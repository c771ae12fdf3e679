//! tests for the bisection root finding algorithm
use approx::assert_abs_diff_eq;
use stepsolve::errors::ErrorKind;
use stepsolve::expression::{Expression, ExpressionError};
use stepsolve::root_finding::bisection::{bisection, BisectionCfg, BisectionError, ConvergencePolicy};
use stepsolve::root_finding::errors::RootFindingError;
use stepsolve::Termination;

type TestResult = Result<(), BisectionError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = Expression::parse("x^2 - 2")?;
    let res = bisection(&f, 0.0, 2.0, BisectionCfg::new())?;

    // 8 halvings bring the width to 2^-7 <= 0.01, then the final midpoint
    assert_eq!(res.termination, Termination::ToleranceReached);
    assert_eq!(res.iterations, Some(9));
    assert_eq!(res.root, Some(1.41796875));
    assert_eq!(res.final_answer, "x = 1.41 (after 9 iterations)");
    assert_eq!(res.title, "Bisection Method Solution");
    assert_eq!(res.steps.last().map(|s| s.description.as_str()), Some("Final Iteration 9"));

    let table = res.iteration_table.expect("table");
    assert_eq!(table.header, vec!["Iteration", "a", "b", "c", "f(a)", "f(b)", "f(c)", "Error"]);
    Ok(())
}

#[test]
fn final_bracket_within_twice_tolerance() -> TestResult {
    let f   = Expression::parse("x^3 - x - 2")?;
    let cfg = BisectionCfg::new().set_decimal_places(3)?;
    let res = bisection(&f, 1.0, 2.0, cfg)?;

    let table = res.iteration_table.as_ref().expect("table");
    let last  = table.rows.last().expect("row");
    let a: f64 = last[1].parse().expect("a");
    let b: f64 = last[2].parse().expect("b");
    assert!(b - a <= 2.0 * cfg.tolerance() + 1e-6);
    assert_abs_diff_eq!(res.root.expect("root"), 1.5213797, epsilon = 1e-3);
    assert_eq!(res.final_answer, "x = 1.520 (after 11 iterations)");
    Ok(())
}

#[test]
fn interval_width_halves_every_pass() -> TestResult {
    let f   = Expression::parse("x^2 - 2")?;
    let res = bisection(&f, 0.0, 2.0, BisectionCfg::new())?;

    let table = res.iteration_table.expect("table");
    let widths: Vec<f64> = table.rows[..table.len() - 1]
        .iter()
        .map(|r| r[7].parse().expect("error cell"))
        .collect();
    for pair in widths.windows(2) {
        assert_abs_diff_eq!(pair[1], pair[0] / 2.0, epsilon = 1e-6);
    }
    Ok(())
}

#[test]
fn step_indices_are_contiguous() -> TestResult {
    let f   = Expression::parse("cos(x) - x")?;
    let res = bisection(&f, 0.0, 1.0, BisectionCfg::new())?;

    for (i, step) in res.steps.iter().enumerate() {
        assert_eq!(step.index, i + 1);
    }
    assert_eq!(res.steps.len(), res.iterations.expect("iterations"));
    Ok(())
}

#[test]
fn stops_on_exact_root() -> TestResult {
    let f   = Expression::parse("x - 1")?;
    let res = bisection(&f, 0.0, 2.0, BisectionCfg::new())?;

    assert_eq!(res.termination, Termination::ExactRoot);
    assert_eq!(res.root, Some(1.0));
    assert_eq!(res.iterations, Some(1));
    Ok(())
}

#[test]
fn no_sign_change_fails_fast() -> TestResult {
    let f   = Expression::parse("x^2 + 1")?;
    let err = bisection(&f, -1.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::NoRootInInterval { a, b, .. } if a == -1.0 && b == 1.0));
    assert_eq!(err.kind(), ErrorKind::NoRootInInterval);
    Ok(())
}

#[test]
fn no_sign_change_best_effort_diagnostic() -> TestResult {
    let f   = Expression::parse("x^2 + 1")?;
    let cfg = BisectionCfg::new().with_policy(ConvergencePolicy::BestEffort);
    let res = bisection(&f, -1.0, 1.0, cfg)?;

    assert_eq!(res.termination, Termination::NoRootInInterval);
    assert!(!res.converged());
    assert_eq!(res.steps.len(), 1);
    assert_eq!(res.steps[0].index, 1);
    assert_eq!(res.root, None);
    Ok(())
}

#[test]
fn iteration_cap_fails_fast() -> TestResult {
    let f   = Expression::parse("x^2 - 2")?;
    let cfg = BisectionCfg::new().set_max_iter(3)?;
    let err = bisection(&f, 0.0, 2.0, cfg).unwrap_err();

    assert!(matches!(err, BisectionError::Common(RootFindingError::MaxIterationsExceeded { max_iter: 3 })));
    assert_eq!(err.kind(), ErrorKind::MaxIterationsExceeded);
    Ok(())
}

#[test]
fn iteration_cap_best_effort_reports_final_midpoint() -> TestResult {
    let f   = Expression::parse("x^2 - 2")?;
    let cfg = BisectionCfg::new()
        .set_max_iter(3)?
        .with_policy(ConvergencePolicy::BestEffort);
    let res = bisection(&f, 0.0, 2.0, cfg)?;

    // [0, 2] -> [1, 2] -> [1, 1.5] -> [1.25, 1.5], then the final midpoint
    assert_eq!(res.termination, Termination::IterationLimit);
    assert_eq!(res.iterations, Some(4));
    assert_eq!(res.root, Some(1.375));
    assert!(!res.converged());
    Ok(())
}

#[test]
fn invalid_bounds() -> TestResult {
    let f   = Expression::parse("x")?;
    let err = bisection(&f, 1.0, 1.0, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBounds { .. }));

    let err = bisection(&f, f64::NAN, 1.0, BisectionCfg::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    Ok(())
}

#[test]
fn non_finite_eval() -> TestResult {
    let f   = Expression::parse("sqrt(x) - 2")?;
    let err = bisection(&f, -1.0, 5.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::Expression(ExpressionError::NonFinite { x, .. }))
        if x == -1.0));
    assert_eq!(err.kind(), ErrorKind::ExpressionError);
    Ok(())
}

#[test]
fn rejects_invalid_config() {
    assert!(matches!(
        BisectionCfg::new().set_decimal_places(16),
        Err(RootFindingError::InvalidDecimalPlaces { got: 16, max: 15 })
    ));
    assert!(matches!(
        BisectionCfg::new().set_max_iter(0),
        Err(RootFindingError::InvalidMaxIter { got: 0 })
    ));
}
