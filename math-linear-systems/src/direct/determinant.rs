//! Determinant by recursive cofactor expansion
//!
//! Expands along the first row. Each minor is built from rows `1..n` with a
//! cyclic column map: column `k` of the minor of entry `(0, i)` is column
//! `(k + i + 1) mod n` of the parent. The cyclic minor is a rotation of the
//! usual skip-column minor by `i` places, which has parity `i·(n−1−i)`, so the
//! cofactor sign becomes `(−1)^(i·(n−i))`. For even `n` this is the familiar
//! `(−1)^i`.
//!
//! The expansion is O(n!) and single-threaded; callers parallelize above it.

use crate::error::{Result, SolverError};
use crate::traits::RealField;
use ndarray::{Array2, ArrayView2};

/// Compute det(M) for a square, non-empty matrix
pub fn determinant<T: RealField>(m: &Array2<T>) -> Result<T> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(SolverError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(SolverError::EmptySystem);
    }
    Ok(cofactor_expansion(&m.view()))
}

/// Recursive expansion; `m` must already be known to be square and non-empty
pub(crate) fn cofactor_expansion<T: RealField>(m: &ArrayView2<T>) -> T {
    let n = m.nrows();
    match n {
        1 => m[[0, 0]],
        2 => m[[0, 0]] * m[[1, 1]] - m[[0, 1]] * m[[1, 0]],
        _ => {
            let mut det = T::zero();
            for i in 0..n {
                let minor = cyclic_minor(m, i);
                det += T::sign(i * (n - i)) * m[[0, i]] * cofactor_expansion(&minor.view());
            }
            det
        }
    }
}

/// (n−1)×(n−1) minor of entry `(0, i)` with cyclically reindexed columns
fn cyclic_minor<T: RealField>(m: &ArrayView2<T>, i: usize) -> Array2<T> {
    let n = m.nrows();
    Array2::from_shape_fn((n - 1, n - 1), |(r, k)| m[[r + 1, (k + i + 1) % n]])
}
