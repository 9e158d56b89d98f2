//! Dense linear system solvers
//!
//! This crate solves dense systems `Ax = b` with two direct methods, each in a
//! sequential and a parallel variant, so the variants can be compared on the
//! same input.
//!
//! # Features
//!
//! - **Gaussian elimination**: partial pivoting, unit-diagonal reduction and
//!   back-substitution; the row-elimination region of each pivot step runs in
//!   parallel
//! - **Cramer's rule**: recursive cofactor-expansion determinants; the
//!   per-unknown loop runs in parallel
//! - **Generic scalar types**: works with f64 and f32
//! - **rayon** parallel regions behind the default `native` feature, with a
//!   sequential fallback
//!
//! # Example
//!
//! ```
//! use linear_systems::{solve_gaussian_parallel, solve_cramer_sequential};
//! use ndarray::array;
//!
//! let a = array![[2.0_f64, 1.0], [1.0, 3.0]];
//! let b = array![3.0_f64, 5.0];
//!
//! let x = solve_gaussian_parallel(&a, &b)?;
//! assert!((x[0] - 0.8).abs() < 1e-12);
//!
//! let y = solve_cramer_sequential(&a, &b)?;
//! assert!((y[1] - 1.4).abs() < 1e-12);
//! # Ok::<(), linear_systems::SolverError>(())
//! ```

pub mod direct;
pub mod error;
pub mod matrix;
pub mod parallel;
pub mod solver;
pub mod traits;

// Re-export main types
pub use error::{Result, SolverError};
pub use parallel::Execution;
pub use solver::{Algorithm, SolverMethod, solve};
pub use traits::RealField;

// Re-export solvers
pub use direct::{
    GaussianConfig, cramer, determinant, gaussian_elimination, select_pivot,
    solve_cramer_parallel, solve_cramer_sequential, solve_gaussian_parallel,
    solve_gaussian_sequential,
};

// Re-export matrix utilities
pub use matrix::{augment, replace_column, residual_norm};
