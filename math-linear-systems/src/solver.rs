//! Solver selection
//!
//! A single entry point over the four direct solvers, so callers such as the
//! comparison harness and the benchmarks can iterate over methods.

use crate::direct::{GaussianConfig, cramer, gaussian_elimination};
use crate::error::Result;
use crate::parallel::Execution;
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use std::fmt;
use std::str::FromStr;

/// Algorithm family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Gaussian elimination with partial pivoting, O(n³)
    Gaussian,
    /// Cramer's rule with cofactor-expansion determinants, O(n!)
    Cramer,
}

/// One of the four solvers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverMethod {
    GaussianSequential,
    GaussianParallel,
    CramerSequential,
    CramerParallel,
}

impl SolverMethod {
    /// Every method, sequential before parallel within a family
    pub const ALL: [SolverMethod; 4] = [
        SolverMethod::GaussianSequential,
        SolverMethod::GaussianParallel,
        SolverMethod::CramerSequential,
        SolverMethod::CramerParallel,
    ];

    pub fn algorithm(self) -> Algorithm {
        match self {
            SolverMethod::GaussianSequential | SolverMethod::GaussianParallel => {
                Algorithm::Gaussian
            }
            SolverMethod::CramerSequential | SolverMethod::CramerParallel => Algorithm::Cramer,
        }
    }

    pub fn execution(self) -> Execution {
        match self {
            SolverMethod::GaussianSequential | SolverMethod::CramerSequential => {
                Execution::Sequential
            }
            SolverMethod::GaussianParallel | SolverMethod::CramerParallel => Execution::Parallel,
        }
    }

    /// Stable kebab-case name, also accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            SolverMethod::GaussianSequential => "gaussian-sequential",
            SolverMethod::GaussianParallel => "gaussian-parallel",
            SolverMethod::CramerSequential => "cramer-sequential",
            SolverMethod::CramerParallel => "cramer-parallel",
        }
    }
}

impl fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SolverMethod::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown solver method '{}', expected one of: {}",
                    s,
                    SolverMethod::ALL.map(SolverMethod::name).join(", ")
                )
            })
    }
}

/// Solve Ax = b with the selected method and default settings
pub fn solve<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    method: SolverMethod,
) -> Result<Array1<T>> {
    match method.algorithm() {
        Algorithm::Gaussian => {
            gaussian_elimination(a, b, &GaussianConfig::with_execution(method.execution()))
        }
        Algorithm::Cramer => cramer(a, b, method.execution()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_method_properties() {
        assert_eq!(SolverMethod::GaussianParallel.algorithm(), Algorithm::Gaussian);
        assert_eq!(SolverMethod::CramerSequential.algorithm(), Algorithm::Cramer);
        assert_eq!(SolverMethod::CramerParallel.execution(), Execution::Parallel);
        assert_eq!(SolverMethod::GaussianSequential.execution(), Execution::Sequential);
    }

    #[test]
    fn test_parse_round_trip() {
        for method in SolverMethod::ALL {
            assert_eq!(method.to_string().parse::<SolverMethod>(), Ok(method));
        }
        assert_eq!("Cramer-Parallel".parse::<SolverMethod>(), Ok(SolverMethod::CramerParallel));
        assert!("lu".parse::<SolverMethod>().is_err());
    }

    #[test]
    fn test_solve_dispatch() {
        let a = array![[2.0_f64, 1.0], [1.0, 3.0]];
        let b = array![3.0_f64, 5.0];

        for method in SolverMethod::ALL {
            let x = solve(&a, &b, method).expect("solve should succeed");
            assert_relative_eq!(x[0], 0.8, epsilon = 1e-12);
            assert_relative_eq!(x[1], 1.4, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_singular_dispatch() {
        let a = array![[1.0_f64, 1.0], [1.0, 1.0]];
        let b = array![2.0_f64, 2.0];

        for method in SolverMethod::ALL {
            let err = solve(&a, &b, method).unwrap_err();
            match method.algorithm() {
                Algorithm::Gaussian => {
                    assert!(matches!(err, SolverError::SingularMatrix { .. }))
                }
                Algorithm::Cramer => assert_eq!(err, SolverError::NoUniqueSolution),
            }
        }
    }
}
