//! Shared matrix utilities
//!
//! Shape validation, the augmented matrix `[A | b]` used by Gaussian
//! elimination, the column-replaced copy `A_i` used by Cramer's rule, and a
//! residual check for callers.

use crate::error::{Result, SolverError};
use crate::traits::RealField;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, s};

/// Check that `(A, b)` is a square, non-empty system with matching sizes
///
/// Returns the order `n` of the system.
pub fn validate_system<T: RealField>(a: &ArrayView2<T>, b: &ArrayView1<T>) -> Result<usize> {
    let (rows, cols) = a.dim();
    if rows != b.len() {
        return Err(SolverError::DimensionMismatch {
            rows,
            rhs_len: b.len(),
        });
    }
    if rows != cols {
        return Err(SolverError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(SolverError::EmptySystem);
    }
    Ok(rows)
}

/// Build the n×(n+1) augmented matrix `[A | b]`
///
/// Row `i` holds `A`'s row `i` followed by `b[i]`. The result is a fresh
/// allocation owned by the caller.
pub fn augment<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array2<T>> {
    let n = validate_system(&a.view(), &b.view())?;

    let mut ab = Array2::zeros((n, n + 1));
    ab.slice_mut(s![.., ..n]).assign(a);
    ab.column_mut(n).assign(b);
    Ok(ab)
}

/// Copy `A` with column `col` overwritten by `b`
pub fn replace_column<T: RealField>(a: &ArrayView2<T>, col: usize, b: &ArrayView1<T>) -> Array2<T> {
    let mut ai = a.to_owned();
    ai.column_mut(col).assign(b);
    ai
}

/// Max-norm of the residual `A·x − b`
pub fn residual_norm<T: RealField>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> Result<T> {
    validate_system(&a.view(), &b.view())?;
    if x.len() != b.len() {
        return Err(SolverError::DimensionMismatch {
            rows: b.len(),
            rhs_len: x.len(),
        });
    }

    let ax = a.dot(x);
    Ok(ax
        .iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&lhs, &rhs)| acc.max((lhs - rhs).abs())))
}
