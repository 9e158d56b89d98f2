//! Cramer's rule
//!
//! `x[i] = det(A_i) / det(A)` where `A_i` is `A` with column `i` replaced by
//! `b`. det(A) is computed once up front; the per-unknown loop is the parallel
//! region. Every task builds its own private `A_i` and writes only its own
//! slot of `x`, so the tasks share nothing mutable.

use super::determinant::cofactor_expansion;
use crate::error::{Result, SolverError};
use crate::matrix::{replace_column, validate_system};
use crate::parallel::{Execution, for_each_indexed_mut};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Solve Ax = b with Cramer's rule, one unknown after another
pub fn solve_cramer_sequential<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    cramer(a, b, Execution::Sequential)
}

/// Solve Ax = b with Cramer's rule, one task per unknown
pub fn solve_cramer_parallel<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    cramer(a, b, Execution::Parallel)
}

/// Solve Ax = b with Cramer's rule
///
/// # Errors
/// - [`SolverError::NoUniqueSolution`] if det(A) is exactly zero
/// - a shape error if `A` is not square or does not match `b`
pub fn cramer<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    execution: Execution,
) -> Result<Array1<T>> {
    let n = validate_system(&a.view(), &b.view())?;

    log::debug!("Cramer's rule ({}): n = {}", execution.label(), n);

    let det_a = cofactor_expansion(&a.view());
    if det_a.is_zero() {
        log::warn!("Cramer's rule aborted: det(A) is zero");
        return Err(SolverError::NoUniqueSolution);
    }

    let a = a.view();
    let b = b.view();
    let mut x = vec![T::zero(); n];

    for_each_indexed_mut(execution, &mut x, |i, xi| {
        let ai = replace_column(&a, i, &b);
        *xi = cofactor_expansion(&ai.view()) / det_a;
    });

    log::debug!("Cramer's rule ({}) finished", execution.label());
    Ok(Array1::from_vec(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_two_by_two() {
        let a = array![[2.0_f64, 1.0], [1.0, 3.0]];
        let b = array![3.0_f64, 5.0];

        for x in [
            solve_cramer_sequential(&a, &b).expect("solve should succeed"),
            solve_cramer_parallel(&a, &b).expect("solve should succeed"),
        ] {
            assert_relative_eq!(x[0], 0.8, epsilon = 1e-12);
            assert_relative_eq!(x[1], 1.4, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_identity_is_exact() {
        let a = array![[1.0_f64, 0.0], [0.0, 1.0]];
        let b = array![7.0_f64, -2.0];

        assert_eq!(solve_cramer_sequential(&a, &b).unwrap(), array![7.0, -2.0]);
        assert_eq!(solve_cramer_parallel(&a, &b).unwrap(), array![7.0, -2.0]);
    }

    #[test]
    fn test_zero_determinant() {
        let a = array![[1.0_f64, 1.0], [1.0, 1.0]];
        let b = array![2.0_f64, 2.0];

        assert_eq!(
            solve_cramer_sequential(&a, &b).unwrap_err(),
            SolverError::NoUniqueSolution
        );
        assert_eq!(
            solve_cramer_parallel(&a, &b).unwrap_err(),
            SolverError::NoUniqueSolution
        );
    }

    #[test]
    fn test_zero_row() {
        let a = array![[1.0_f64, 2.0, 3.0], [0.0, 0.0, 0.0], [4.0, 5.0, 6.0]];
        let b = array![1.0_f64, 2.0, 3.0];

        assert_eq!(
            solve_cramer_parallel(&a, &b).unwrap_err(),
            SolverError::NoUniqueSolution
        );
    }

    #[test]
    fn test_three_by_three_round_trip() {
        let a = array![[2.0_f64, -1.0, 0.0], [1.0, 3.0, 2.0], [0.0, 1.0, 4.0]];
        let b = array![1.0_f64, 13.0, 14.0];

        let x = solve_cramer_parallel(&a, &b).unwrap();
        let ax = a.dot(&x);
        for i in 0..3 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_sequential_and_parallel_are_identical() {
        let a = array![
            [4.0_f64, -2.0, 1.0, 3.0],
            [3.0, 6.0, -4.0, 2.0],
            [2.0, 1.0, 8.0, -5.0],
            [1.0, -3.0, 2.0, 7.0]
        ];
        let b = array![20.0_f64, 9.0, -4.0, 11.0];

        let seq = solve_cramer_sequential(&a, &b).unwrap();
        let par = solve_cramer_parallel(&a, &b).unwrap();

        // each slot is computed by the same arithmetic in either mode
        assert_eq!(seq, par);
    }

    #[test]
    fn test_shape_errors() {
        let a = array![[1.0_f64, 2.0], [3.0, 4.0]];
        let b = array![1.0_f64];

        let err = solve_cramer_sequential(&a, &b).unwrap_err();
        assert!(err.is_dimension_error());
    }
}
