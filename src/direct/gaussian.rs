//! Gaussian elimination solver
//!
//! Solves dense square systems by forward elimination with partial pivoting
//! followed by back-substitution. Exact up to floating-point rounding for any
//! non-singular system; near-zero pivots are reported as
//! [`SolveError::SingularMatrix`] instead of being divided through.

use crate::error::SolveError;
use crate::system::LinearSystem;
use crate::traits::{LinearSolver, RealField};
use ndarray::Array1;

/// Gaussian elimination configuration
#[derive(Debug, Clone)]
pub struct GaussianConfig<R> {
    /// Pivots with magnitude below this are treated as zero and the
    /// system reported singular
    pub pivot_epsilon: R,
}

impl Default for GaussianConfig<f64> {
    fn default() -> Self {
        Self {
            pivot_epsilon: 1e-30,
        }
    }
}

impl Default for GaussianConfig<f32> {
    fn default() -> Self {
        Self {
            pivot_epsilon: 1e-20,
        }
    }
}

/// Solve Ax = b by Gaussian elimination with partial pivoting
///
/// Pivot selection scans the rows below the diagonal and swaps whenever a
/// row's column magnitude beats the current pivot row. Row i therefore ends
/// up holding the running maximum, while displaced rows stay where the scan
/// dropped them; the elimination order, and with it the exact rounding of
/// the output, is fixed by this sequence.
pub fn gaussian_solve<T: RealField>(
    system: &LinearSystem<T>,
    config: &GaussianConfig<T>,
) -> Result<Array1<T>, SolveError> {
    let n = system.validate()?;
    let mut matrix = system.to_augmented();

    for i in 0..n {
        // Scan-swap pivoting: compare each remaining row against the
        // current row i, not against a saved maximum.
        for k in (i + 1)..n {
            if matrix[[k, i]].abs() > matrix[[i, i]].abs() {
                for j in 0..=n {
                    let tmp = matrix[[i, j]];
                    matrix[[i, j]] = matrix[[k, j]];
                    matrix[[k, j]] = tmp;
                }
            }
        }

        let pivot = matrix[[i, i]];
        if pivot.abs() < config.pivot_epsilon {
            return Err(SolveError::SingularMatrix {
                column: i,
                pivot: pivot.abs().to_f64().unwrap_or(0.0),
            });
        }

        for k in (i + 1)..n {
            let factor = matrix[[k, i]] / pivot;
            for j in i..=n {
                let update = factor * matrix[[i, j]];
                matrix[[k, j]] -= update;
            }
        }
    }

    let mut x = Array1::from_elem(n, T::zero());
    for i in (0..n).rev() {
        x[i] = matrix[[i, n]] / matrix[[i, i]];
        for k in (0..i).rev() {
            let update = matrix[[k, i]] * x[i];
            matrix[[k, n]] -= update;
        }
    }

    Ok(x)
}

/// Gaussian elimination solver with a fixed configuration
#[derive(Debug, Clone)]
pub struct GaussianSolver<T> {
    config: GaussianConfig<T>,
}

impl<T: RealField> GaussianSolver<T> {
    /// Create a solver with the given configuration
    pub fn new(config: GaussianConfig<T>) -> Self {
        Self { config }
    }

    /// Borrow the solver configuration
    pub fn config(&self) -> &GaussianConfig<T> {
        &self.config
    }
}

impl<T> Default for GaussianSolver<T>
where
    GaussianConfig<T>: Default,
{
    fn default() -> Self {
        Self {
            config: GaussianConfig::default(),
        }
    }
}

impl<T: RealField> LinearSolver<T> for GaussianSolver<T> {
    fn solve(&self, system: &LinearSystem<T>) -> Result<Array1<T>, SolveError> {
        gaussian_solve(system, &self.config)
    }
}
