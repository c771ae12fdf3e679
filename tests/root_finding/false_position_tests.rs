//! tests for the false position root finding algorithm
use approx::assert_abs_diff_eq;
use stepsolve::errors::ErrorKind;
use stepsolve::expression::Expression;
use stepsolve::root_finding::errors::RootFindingError;
use stepsolve::root_finding::false_position::{false_position, FalsePositionCfg, FalsePositionError};
use stepsolve::Termination;

type TestResult = Result<(), FalsePositionError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = Expression::parse("x^2 - 2")?;
    let res = false_position(&f, 0.0, 2.0, FalsePositionCfg::new())?;

    assert_eq!(res.termination, Termination::ToleranceReached);
    assert_eq!(res.iterations, Some(5));
    assert_abs_diff_eq!(res.root.expect("root"), 2.0_f64.sqrt(), epsilon = 1e-3);
    assert_eq!(res.title, "False Position Method Solution");
    Ok(())
}

#[test]
fn first_chord_and_error_metric() -> TestResult {
    let f   = Expression::parse("x^2 - 2")?;
    let res = false_position(&f, 0.0, 2.0, FalsePositionCfg::new())?;
    let table = res.iteration_table.expect("table");

    // c1 = (0 * 2 - 2 * -2) / (2 + 2) = 1, error = b - a on the first pass
    assert_eq!(table.rows[0][3], "1.000000");
    assert_eq!(table.rows[0][7], "2.000000");
    // c2 = 4/3, error = |c2 - c1|
    assert_eq!(table.rows[1][3], "1.333333");
    assert_eq!(table.rows[1][7], "0.333333");
    Ok(())
}

#[test]
fn converging_on_the_last_allowed_iteration_succeeds() -> TestResult {
    let f   = Expression::parse("x^2 - 2")?;
    let cfg = FalsePositionCfg::new().set_max_iter(5)?;
    let res = false_position(&f, 0.0, 2.0, cfg)?;

    assert_eq!(res.iterations, Some(5));
    assert!(res.converged());
    Ok(())
}

#[test]
fn iteration_cap_fails() -> TestResult {
    let f   = Expression::parse("x^3 - x - 2")?;
    let cfg = FalsePositionCfg::new()
        .set_decimal_places(4)?
        .set_max_iter(3)?;
    let err = false_position(&f, 1.0, 2.0, cfg).unwrap_err();

    assert!(matches!(err, FalsePositionError::Common(RootFindingError::MaxIterationsExceeded { max_iter: 3 })));
    Ok(())
}

#[test]
fn step_indices_are_contiguous() -> TestResult {
    let f   = Expression::parse("x^3 - x - 2")?;
    let cfg = FalsePositionCfg::new().set_decimal_places(4)?;
    let res = false_position(&f, 1.0, 2.0, cfg)?;

    for (i, step) in res.steps.iter().enumerate() {
        assert_eq!(step.index, i + 1);
    }
    assert_abs_diff_eq!(res.root.expect("root"), 1.5213797, epsilon = 1e-3);
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    let f   = Expression::parse("x^2 + 1")?;
    let err = false_position(&f, -1.0, 1.0, FalsePositionCfg::new()).unwrap_err();

    assert!(matches!(err, FalsePositionError::NoRootInInterval { .. }));
    assert_eq!(err.kind(), ErrorKind::NoRootInInterval);
    Ok(())
}

#[test]
fn overflowing_chord_is_degenerate() -> TestResult {
    // a * f(b) overflows to -inf, leaving c = NaN
    let f   = Expression::parse("x")?;
    let err = false_position(&f, -1e300, 1e300, FalsePositionCfg::new()).unwrap_err();

    assert!(matches!(err, FalsePositionError::DegenerateInterval { .. }));
    assert_eq!(err.kind(), ErrorKind::DegenerateInterval);
    Ok(())
}

#[test]
fn invalid_bounds() -> TestResult {
    let f   = Expression::parse("x")?;
    let err = false_position(&f, 2.0, 1.0, FalsePositionCfg::new()).unwrap_err();

    assert!(matches!(err, FalsePositionError::InvalidBounds { a, b } if a == 2.0 && b == 1.0));
    Ok(())
}
