//! Gaussian elimination with partial pivoting
//!
//! Row-reduces the augmented matrix `[A | b]` to upper-triangular form with a
//! unit diagonal, then back-substitutes. Each pivot step is:
//!
//! 1. pivot search over rows `i..n` of column `i` (first maximum wins)
//! 2. row swap
//! 3. singularity check against the pivot tolerance
//! 4. normalization of row `i` so the pivot becomes 1
//! 5. elimination of column `i` from every row below
//!
//! Only step 5 runs in parallel. Rows below the pivot are disjoint, so each
//! task gets exclusive access to one row and a shared read-only view of the
//! pivot row; the region is joined before step `i + 1` starts.

use crate::error::{Result, SolverError};
use crate::matrix::augment;
use crate::parallel::{Execution, for_each_indexed_mut};
use crate::traits::RealField;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayViewMut1, Axis};

/// Gaussian elimination configuration
#[derive(Debug, Clone)]
pub struct GaussianConfig<R> {
    /// How the row-elimination region of each pivot step runs
    pub execution: Execution,
    /// Pivots with an absolute value below this abort the solve
    pub pivot_tolerance: R,
}

impl<R: RealField> Default for GaussianConfig<R> {
    fn default() -> Self {
        Self {
            execution: Execution::Sequential,
            pivot_tolerance: R::default_pivot_tolerance(),
        }
    }
}

impl<R: RealField> GaussianConfig<R> {
    /// Default configuration with the given execution mode
    pub fn with_execution(execution: Execution) -> Self {
        Self {
            execution,
            ..Default::default()
        }
    }
}

/// Solve Ax = b with Gaussian elimination, eliminating rows in a plain loop
pub fn solve_gaussian_sequential<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>> {
    gaussian_elimination(a, b, &GaussianConfig::with_execution(Execution::Sequential))
}

/// Solve Ax = b with Gaussian elimination, eliminating rows in parallel
pub fn solve_gaussian_parallel<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    gaussian_elimination(a, b, &GaussianConfig::with_execution(Execution::Parallel))
}

/// Solve Ax = b with Gaussian elimination and partial pivoting
///
/// # Errors
/// - [`SolverError::DimensionMismatch`] if `A` has a different row count than `b`
/// - [`SolverError::SingularMatrix`] if any pivot is below `config.pivot_tolerance`
pub fn gaussian_elimination<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &GaussianConfig<T>,
) -> Result<Array1<T>> {
    let mut ab = augment(a, b)?;
    let n = ab.nrows();

    log::debug!(
        "Gaussian elimination ({}): n = {}, pivot tolerance = {:e}",
        config.execution.label(),
        n,
        config.pivot_tolerance.to_f64_lossy()
    );

    for i in 0..n {
        let pivot_row = select_pivot(&ab.view(), i);
        swap_rows(&mut ab, i, pivot_row);

        let divisor = ab[[i, i]];
        if divisor.abs() < config.pivot_tolerance {
            log::warn!(
                "Gaussian elimination aborted at step {}: pivot {:e} below tolerance",
                i,
                divisor.abs().to_f64_lossy()
            );
            return Err(SolverError::SingularMatrix {
                step: i,
                pivot: divisor.abs().to_f64_lossy(),
                tolerance: config.pivot_tolerance.to_f64_lossy(),
            });
        }

        log::trace!(
            "step {}: pivot row {} value {:e}",
            i,
            pivot_row,
            divisor.to_f64_lossy()
        );

        for j in i..=n {
            ab[[i, j]] /= divisor;
        }

        eliminate_below(&mut ab, i, config.execution);
    }

    let x = back_substitute(&ab.view());
    log::debug!("Gaussian elimination ({}) finished", config.execution.label());
    Ok(x)
}

/// Row in `column..n` with the largest absolute value in `column`
///
/// Ties resolve to the lowest row index.
pub fn select_pivot<T: RealField>(ab: &ArrayView2<T>, column: usize) -> usize {
    let mut max_row = column;
    for j in (column + 1)..ab.nrows() {
        if ab[[j, column]].abs() > ab[[max_row, column]].abs() {
            max_row = j;
        }
    }
    max_row
}

fn swap_rows<T: RealField>(ab: &mut Array2<T>, r1: usize, r2: usize) {
    if r1 == r2 {
        return;
    }
    for j in 0..ab.ncols() {
        ab.swap([r1, j], [r2, j]);
    }
}

/// Subtract multiples of normalized row `i` from every row below it
fn eliminate_below<T: RealField>(ab: &mut Array2<T>, i: usize, execution: Execution) {
    let (head, mut tail) = ab.view_mut().split_at(Axis(0), i + 1);
    let pivot = head.row(i);
    let mut rows: Vec<ArrayViewMut1<T>> = tail.axis_iter_mut(Axis(0)).collect();

    for_each_indexed_mut(execution, &mut rows, |_, row| eliminate_row(row, &pivot, i));
}

#[inline]
fn eliminate_row<T: RealField>(row: &mut ArrayViewMut1<T>, pivot: &ArrayView1<T>, i: usize) {
    let factor = row[i];
    for k in i..row.len() {
        row[k] -= factor * pivot[k];
    }
}

/// Solve the unit upper-triangular system left in `ab`
fn back_substitute<T: RealField>(ab: &ArrayView2<T>) -> Array1<T> {
    let n = ab.nrows();
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        x[i] = ab[[i, n]];
        for j in (i + 1)..n {
            x[i] = x[i] - ab[[i, j]] * x[j];
        }
    }
    x
}
