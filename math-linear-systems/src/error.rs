//! Error types for the dense solvers.
//!
//! Every failure is a structural or numerical property of the input system, so
//! errors abort the whole solve and carry enough detail to tell which property
//! failed.

use thiserror::Error;

/// Errors that can occur while solving `Ax = b`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    /// The row count of `A` and the length of `b` differ.
    #[error("dimension mismatch: matrix has {rows} rows, right-hand side has {rhs_len} entries")]
    DimensionMismatch {
        /// Number of rows in the coefficient matrix
        rows: usize,
        /// Length of the right-hand-side vector
        rhs_len: usize,
    },

    /// The coefficient matrix is not square.
    #[error("coefficient matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The system has no unknowns.
    #[error("system is empty (n = 0)")]
    EmptySystem,

    /// A pivot fell below the tolerance during Gaussian elimination.
    #[error(
        "matrix is singular or nearly singular: pivot {pivot:e} at step {step} is below {tolerance:e}"
    )]
    SingularMatrix {
        /// Elimination step (column) at which the pivot was rejected
        step: usize,
        /// Absolute value of the rejected pivot
        pivot: f64,
        /// Tolerance in effect for the solve
        tolerance: f64,
    },

    /// det(A) is exactly zero, so Cramer's rule does not apply.
    #[error("determinant is zero: the system has no solution or infinitely many")]
    NoUniqueSolution,
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Returns `true` if the input system has an invalid shape.
    ///
    /// This includes `DimensionMismatch`, `NotSquare` and `EmptySystem`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            SolverError::DimensionMismatch { .. }
                | SolverError::NotSquare { .. }
                | SolverError::EmptySystem
        )
    }

    /// Returns `true` if the system was rejected as singular by either method.
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            SolverError::SingularMatrix { .. } | SolverError::NoUniqueSolution
        )
    }
}
