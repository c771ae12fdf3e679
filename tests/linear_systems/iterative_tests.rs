use approx::assert_abs_diff_eq;
use stepsolve::errors::ErrorKind;
use stepsolve::linear_systems::config::IterativeCfg;
use stepsolve::linear_systems::iterative::{gauss_seidel, jacobi};
use stepsolve::linear_systems::{LinearSystemError, MatrixSystem};
use stepsolve::Termination;

type TestResult = Result<(), LinearSystemError>;

/// Exact solution `(134, 154, 166) / 107`.
fn dominant() -> Result<MatrixSystem, LinearSystemError> {
    MatrixSystem::new(
        vec![vec![4.0, 1.0, 1.0], vec![1.0, 5.0, 1.0], vec![1.0, 1.0, 6.0]],
        vec![8.0, 10.0, 12.0],
    )
}

const EXACT: [f64; 3] = [134.0 / 107.0, 154.0 / 107.0, 166.0 / 107.0];

#[test]
fn seidel_and_jacobi_reach_the_same_fixed_point() -> TestResult {
    let system = dominant()?;
    let cfg    = IterativeCfg::new().set_decimal_places(2)?;

    let gs = gauss_seidel(&system, cfg)?;
    let jc = jacobi(&system, cfg)?;

    for res in [&gs, &jc] {
        assert_eq!(res.termination, Termination::ToleranceReached);
        let x = res.solution.as_ref().expect("solution");
        for (xi, ei) in x.iter().zip(EXACT) {
            assert_abs_diff_eq!(*xi, ei, epsilon = 1e-2);
        }
        assert!(res.iterations.expect("iterations") <= 10);
    }

    assert_eq!(gs.iterations, Some(5));
    assert_eq!(jc.iterations, Some(8));
    Ok(())
}

#[test]
fn first_pass_differs_between_update_rules() -> TestResult {
    let system = dominant()?;
    let cfg    = IterativeCfg::new().set_max_iter(1)?;

    let gs = gauss_seidel(&system, cfg)?.iteration_steps.expect("snapshots");
    let jc = jacobi(&system, cfg)?.iteration_steps.expect("snapshots");

    // Seidel: x = 2, y = (10 - 2) / 5, z = (12 - 2 - 1.6) / 6
    assert_abs_diff_eq!(gs[0].x, 2.0);
    assert_abs_diff_eq!(gs[0].y, 1.6, epsilon = 1e-12);
    assert_abs_diff_eq!(gs[0].z, 1.4, epsilon = 1e-12);
    // Jacobi: every component from zeros
    assert_abs_diff_eq!(jc[0].x, 2.0);
    assert_abs_diff_eq!(jc[0].y, 2.0);
    assert_abs_diff_eq!(jc[0].z, 2.0);
    Ok(())
}

#[test]
fn trace_layout() -> TestResult {
    let res = gauss_seidel(&dominant()?, IterativeCfg::new())?;
    let iterations = res.iterations.expect("iterations");

    assert_eq!(res.steps[0].description, "Diagonal Dominance");
    assert_eq!(res.steps[1].description, "System of Equations");
    assert_eq!(res.steps[2].description, format!("Converged after {iterations} iterations"));
    assert_eq!(res.steps.len(), 3);
    for (i, step) in res.steps.iter().enumerate() {
        assert_eq!(step.index, i + 1);
    }

    let snapshots = res.iteration_steps.as_ref().expect("snapshots");
    assert_eq!(snapshots.len(), iterations);
    assert!(snapshots.iter().enumerate().all(|(i, s)| s.iteration == i + 1 && s.error >= 0.0));

    let table = res.iteration_table.as_ref().expect("table");
    assert_eq!(table.header, vec!["Iteration", "x", "y", "z", "Error"]);
    assert_eq!(table.len(), iterations);
    assert!(res.final_answer.ends_with(&format!("({iterations} iterations)")));
    Ok(())
}

#[test]
fn non_dominant_system_is_advisory_and_cap_is_reported() -> TestResult {
    let system = MatrixSystem::new(
        vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 10.0]],
        vec![1.0, 2.0, 3.0],
    )?;
    let cfg = IterativeCfg::new().set_max_iter(10)?;
    let res = jacobi(&system, cfg)?;

    assert_eq!(res.steps[0].description, "Warning");
    assert_eq!(res.termination, Termination::IterationLimit);
    assert!(!res.converged());
    assert_eq!(res.iterations, Some(10));
    assert!(res.steps.last().expect("step").description.starts_with("Did not converge"));
    Ok(())
}

#[test]
fn overflowing_iterates_are_not_reported_as_converged() -> TestResult {
    let system = MatrixSystem::new(
        vec![
            vec![   1.0,  1000.0, -1000.0],
            vec![-1000.0,    1.0,  1000.0],
            vec![ 1000.0, -1000.0,    1.0],
        ],
        vec![1.0, 2.0, 3.0],
    )?;

    for res in [gauss_seidel(&system, IterativeCfg::new())?, jacobi(&system, IterativeCfg::new())?] {
        assert_eq!(res.termination, Termination::IterationLimit);
        assert!(!res.converged());

        let x = res.solution.as_ref().expect("solution");
        assert!(x.iter().all(|v| v.is_finite()));
        let iterations = res.iterations.expect("iterations");
        assert!(iterations < 100);
        assert_eq!(res.iteration_steps.as_ref().expect("snapshots").len(), iterations);
        assert_eq!(
            res.steps.last().map(|s| s.description.clone()),
            Some(format!("Diverged after {iterations} iterations"))
        );
    }
    Ok(())
}

#[test]
fn huge_off_diagonal_overflows_quickly() -> TestResult {
    let system = MatrixSystem::new(
        vec![vec![1.0, 1e6, -1e6], vec![1e6, 1.0, 1e6], vec![1e6, 1e6, 1.0]],
        vec![1.0, 2.0, 3.0],
    )?;

    let gs = gauss_seidel(&system, IterativeCfg::new())?;
    let jc = jacobi(&system, IterativeCfg::new())?;
    for res in [&gs, &jc] {
        assert_eq!(res.termination, Termination::IterationLimit);
        assert!(res.solution.as_ref().expect("solution").iter().all(|v| v.is_finite()));
    }
    Ok(())
}

#[test]
fn requires_three_unknowns() -> TestResult {
    let system = MatrixSystem::new(vec![vec![2.0, 1.0], vec![1.0, 2.0]], vec![1.0, 1.0])?;
    let err    = gauss_seidel(&system, IterativeCfg::new()).unwrap_err();

    assert!(matches!(err, LinearSystemError::UnsupportedSize { n: 2, expected: 3 }));
    assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    Ok(())
}

#[test]
fn zero_diagonal() -> TestResult {
    let system = MatrixSystem::new(
        vec![vec![4.0, 1.0, 1.0], vec![1.0, 0.0, 1.0], vec![1.0, 1.0, 6.0]],
        vec![8.0, 10.0, 12.0],
    )?;
    let err = jacobi(&system, IterativeCfg::new()).unwrap_err();

    assert!(matches!(err, LinearSystemError::ZeroDiagonal { row: 1 }));
    assert_eq!(err.kind(), ErrorKind::ZeroDiagonal);
    Ok(())
}

#[test]
fn rejects_invalid_config() {
    assert!(matches!(IterativeCfg::new().set_max_iter(0), Err(LinearSystemError::InvalidMaxIter { got: 0 })));
    assert!(matches!(
        IterativeCfg::new().set_decimal_places(20),
        Err(LinearSystemError::InvalidDecimalPlaces { got: 20, max: 15 })
    ));
}
