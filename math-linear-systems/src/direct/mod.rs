//! Direct solvers for dense linear systems
//!
//! This module provides the two direct methods, each with a sequential and a
//! parallel variant:
//! - [`gaussian_elimination`]: Gaussian elimination with partial pivoting
//! - [`cramer`]: Cramer's rule on top of [`determinant`]

mod cramer;
mod determinant;
mod gauss;

pub use cramer::{cramer, solve_cramer_parallel, solve_cramer_sequential};
pub use determinant::determinant;
pub use gauss::{
    GaussianConfig, gaussian_elimination, select_pivot, solve_gaussian_parallel,
    solve_gaussian_sequential,
};
