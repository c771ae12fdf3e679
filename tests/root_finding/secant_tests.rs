use approx::assert_abs_diff_eq;
use stepsolve::errors::ErrorKind;
use stepsolve::expression::Expression;
use stepsolve::root_finding::errors::RootFindingError;
use stepsolve::root_finding::secant::{secant, SecantCfg, SecantError};
use stepsolve::Termination;

type TestResult = Result<(), SecantError>;

#[test]
fn finds_2() -> TestResult {
    let f   = Expression::parse("x^2 - 4")?;
    let res = secant(&f, 1.0, 3.0, SecantCfg::new())?;

    assert_eq!(res.termination, Termination::ToleranceReached);
    assert_eq!(res.iterations, Some(4));
    assert_abs_diff_eq!(res.root.expect("root"), 2.0, epsilon = 1e-3);
    assert_eq!(res.final_answer, "x = 1.999953 (after 4 iterations)");
    Ok(())
}

#[test]
fn finds_sqrt_2_to_six_places() -> TestResult {
    let f   = Expression::parse("x^2 - 2")?;
    let cfg = SecantCfg::new().set_decimal_places(6)?;
    let res = secant(&f, 1.0, 2.0, cfg)?;

    assert_abs_diff_eq!(res.root.expect("root"), 2.0_f64.sqrt(), epsilon = 1e-8);
    for (i, step) in res.steps.iter().enumerate() {
        assert_eq!(step.index, i + 1);
    }
    let table = res.iteration_table.expect("table");
    assert_eq!(table.len(), res.steps.len());
    assert_eq!(table.width(), 7);
    Ok(())
}

#[test]
fn stops_on_exact_root() -> TestResult {
    // chord through (0, -1) and (2, 1) hits x = 1 exactly
    let f   = Expression::parse("x - 1")?;
    let res = secant(&f, 0.0, 2.0, SecantCfg::new())?;

    assert_eq!(res.termination, Termination::ExactRoot);
    assert_eq!(res.root, Some(1.0));
    assert_eq!(res.iterations, Some(1));
    Ok(())
}

#[test]
fn equal_guesses_rejected_before_evaluation() -> TestResult {
    // ln(-1) would fail if it were evaluated
    let f   = Expression::parse("ln(x)")?;
    let err = secant(&f, -1.0, -1.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::InvalidInitialGuess { x0, x1 } if x0 == -1.0 && x1 == -1.0));
    assert_eq!(err.kind(), ErrorKind::InvalidInitialGuess);
    Ok(())
}

#[test]
fn flat_secant_is_division_by_zero() -> TestResult {
    let f   = Expression::parse("x^2")?;
    let err = secant(&f, -1.0, 1.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::DivisionByZero { .. }));
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    Ok(())
}

#[test]
fn iteration_cap_fails() -> TestResult {
    let f   = Expression::parse("x^2 - 2")?;
    let cfg = SecantCfg::new()
        .set_decimal_places(6)?
        .set_max_iter(3)?;
    let err = secant(&f, 1.0, 2.0, cfg).unwrap_err();

    assert!(matches!(err, SecantError::RootFinding(RootFindingError::MaxIterationsExceeded { max_iter: 3 })));
    Ok(())
}
