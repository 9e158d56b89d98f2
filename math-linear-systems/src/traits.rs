//! Core traits for the dense solvers
//!
//! This module defines the scalar abstraction used throughout the crate:
//! - [`RealField`]: Trait for the real element types a system can be built from

use num_traits::{Float, NumAssign};
use std::fmt::Debug;

/// Trait for scalar types that can be used in the dense solvers.
///
/// Both algorithm families only need field arithmetic, an absolute value for
/// pivot search and an exact zero test, so the bound is kept to real floats.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for all entry points in the harness)
/// - `f32` (for memory-constrained applications)
pub trait RealField: Float + NumAssign + Send + Sync + Debug + 'static {
    /// Smallest pivot magnitude Gaussian elimination accepts by default
    fn default_pivot_tolerance() -> Self;

    /// Widen to `f64` for logging and error reporting
    fn to_f64_lossy(self) -> f64;

    /// `(-1)^k` as an exact sign factor
    #[inline]
    fn sign(k: usize) -> Self {
        if k % 2 == 0 { Self::one() } else { -Self::one() }
    }
}

impl RealField for f64 {
    #[inline]
    fn default_pivot_tolerance() -> Self {
        1e-10
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}

impl RealField for f32 {
    #[inline]
    fn default_pivot_tolerance() -> Self {
        1e-10
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
}
