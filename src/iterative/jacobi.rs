//! Jacobi iteration solver
//!
//! Fixed-point iteration that updates every component from the previous
//! estimate: x_new[i] = (b[i] - Σ_{j≠i} a[i][j]·x[j]) / a[i][i].
//!
//! Convergence is guaranteed for strictly diagonally dominant systems and
//! is not checked up front; systems outside that class may exhaust the
//! iteration budget instead.

use crate::error::SolveError;
use crate::system::LinearSystem;
use crate::traits::{LinearSolver, RealField};
use ndarray::Array1;

/// Jacobi solver configuration
#[derive(Debug, Clone)]
pub struct JacobiConfig<R> {
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Largest per-component change below which the iteration has converged
    pub tolerance: R,
    /// Print progress every N iterations (0 = no output)
    pub print_interval: usize,
}

impl Default for JacobiConfig<f64> {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-10,
            print_interval: 0,
        }
    }
}

impl Default for JacobiConfig<f32> {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-5,
            print_interval: 0,
        }
    }
}

/// Jacobi solver result
#[derive(Debug)]
pub struct JacobiSolution<T: RealField> {
    /// Solution estimate
    pub x: Array1<T>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Largest per-component change at the final iteration
    pub max_diff: T,
    /// Whether convergence was achieved
    pub converged: bool,
}

/// Solve Ax = b using Jacobi iteration
///
/// Starts from the zero vector and iterates until the largest per-component
/// change drops below `config.tolerance` or `config.max_iterations` runs out.
/// Shape errors are returned as `Err`; running out of budget is reported via
/// the `converged` flag on the solution.
pub fn jacobi<T: RealField>(
    system: &LinearSystem<T>,
    config: &JacobiConfig<T>,
) -> Result<JacobiSolution<T>, SolveError> {
    let n = system.validate()?;
    if n == 0 {
        return Err(SolveError::EmptySystem);
    }

    let a = system.to_augmented();
    let mut x = Array1::from_elem(n, T::zero());
    let mut x_new = Array1::from_elem(n, T::zero());
    let mut last_diff = T::infinity();

    for iteration in 0..config.max_iterations {
        for i in 0..n {
            let mut sum = T::zero();
            for j in 0..n {
                if j != i {
                    sum += a[[i, j]] * x[j];
                }
            }
            x_new[i] = (a[[i, n]] - sum) / a[[i, i]];
        }

        // A zero diagonal divides to ±inf/NaN; once an estimate goes
        // non-finite no later iteration can recover, and a NaN difference
        // must not slip past the convergence test below.
        if x_new.iter().any(|v| !v.is_finite()) {
            return Ok(JacobiSolution {
                x: x_new,
                iterations: iteration + 1,
                max_diff: T::infinity(),
                converged: false,
            });
        }

        let mut max_diff = T::zero();
        for i in 0..n {
            max_diff = max_diff.max((x_new[i] - x[i]).abs());
        }
        last_diff = max_diff;

        if config.print_interval > 0 && (iteration + 1) % config.print_interval == 0 {
            log::info!(
                "Jacobi iteration {}: max change = {:.6e}",
                iteration + 1,
                max_diff.to_f64().unwrap_or(0.0)
            );
        }

        if max_diff < config.tolerance {
            return Ok(JacobiSolution {
                x: x_new,
                iterations: iteration + 1,
                max_diff,
                converged: true,
            });
        }

        std::mem::swap(&mut x, &mut x_new);
    }

    Ok(JacobiSolution {
        x,
        iterations: config.max_iterations,
        max_diff: last_diff,
        converged: false,
    })
}

/// Jacobi solver with a fixed configuration
#[derive(Debug, Clone)]
pub struct JacobiSolver<T> {
    config: JacobiConfig<T>,
}

impl<T: RealField> JacobiSolver<T> {
    /// Create a solver with the given configuration
    pub fn new(config: JacobiConfig<T>) -> Self {
        Self { config }
    }

    /// Borrow the solver configuration
    pub fn config(&self) -> &JacobiConfig<T> {
        &self.config
    }
}

impl<T> Default for JacobiSolver<T>
where
    JacobiConfig<T>: Default,
{
    fn default() -> Self {
        Self {
            config: JacobiConfig::default(),
        }
    }
}

impl<T: RealField> LinearSolver<T> for JacobiSolver<T> {
    fn solve(&self, system: &LinearSystem<T>) -> Result<Array1<T>, SolveError> {
        let solution = jacobi(system, &self.config)?;
        if solution.converged {
            Ok(solution.x)
        } else {
            Err(SolveError::NoConvergence {
                max_iterations: self.config.max_iterations,
                last_diff: solution.max_diff.to_f64().unwrap_or(f64::INFINITY),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::{GaussianConfig, gaussian_solve};
    use approx::assert_relative_eq;

    #[test]
    fn test_diagonally_dominant_system_converges() {
        // 4x - y = 3, -x + 4y - z = 3, -y + 4z = 3
        let system = LinearSystem::from_rows(vec![
            vec![4.0, -1.0, 0.0, 3.0],
            vec![-1.0, 4.0, -1.0, 3.0],
            vec![0.0, -1.0, 4.0, 3.0],
        ]);

        let solution = jacobi(&system, &JacobiConfig::default()).unwrap();

        assert!(solution.converged);
        assert!(solution.iterations < 1000);
        assert_relative_eq!(solution.x[0], 15.0 / 14.0, epsilon = 1e-5);
        assert_relative_eq!(solution.x[1], 9.0 / 7.0, epsilon = 1e-5);
        assert_relative_eq!(solution.x[2], 15.0 / 14.0, epsilon = 1e-5);
    }

    #[test]
    fn test_matches_direct_solver() {
        let system = LinearSystem::from_rows(vec![
            vec![10.0, 1.0, -2.0, 1.0, 6.0],
            vec![2.0, 8.0, 1.0, -1.0, 5.0],
            vec![-1.0, 1.0, 9.0, 2.0, 3.0],
            vec![1.0, -2.0, 1.0, 7.0, 4.0],
        ]);

        let iterative = jacobi(&system, &JacobiConfig::default()).unwrap();
        let direct = gaussian_solve(&system, &GaussianConfig::default()).unwrap();

        assert!(iterative.converged);
        for i in 0..4 {
            assert_relative_eq!(iterative.x[i], direct[i], epsilon = 1e-8);
        }
    }

    #[test]
    fn test_non_dominant_system_exhausts_budget() {
        // Off-diagonal entries dominate; the iteration diverges.
        let system = LinearSystem::from_rows(vec![vec![1.0, 2.0, 3.0], vec![2.0, 1.0, 3.0]]);

        let solution = jacobi(&system, &JacobiConfig::default()).unwrap();
        assert!(!solution.converged);
    }

    #[test]
    fn test_zero_diagonal_breaks_down() {
        let system: LinearSystem<f64> =
            LinearSystem::from_rows(vec![vec![0.0, 1.0, 1.0], vec![1.0, 0.0, 1.0]]);

        let solution = jacobi(&system, &JacobiConfig::default()).unwrap();
        assert!(!solution.converged);
        assert!(solution.max_diff.is_infinite());
        assert!(solution.iterations <= 2);
    }

    #[test]
    fn test_empty_system_is_invalid() {
        let system: LinearSystem<f64> = LinearSystem::from_rows(vec![]);
        let err = jacobi(&system, &JacobiConfig::default()).unwrap_err();
        assert!(matches!(err, SolveError::EmptySystem));
        assert_eq!(err.to_string(), "invalid system of equations");
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let system = LinearSystem::from_rows(vec![vec![4.0, -1.0], vec![-1.0, 4.0]]);
        let err = jacobi(&system, &JacobiConfig::default()).unwrap_err();
        assert!(matches!(err, SolveError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_diagonal_system_converges_immediately() {
        let system = LinearSystem::from_rows(vec![vec![1.0, 0.0, 5.0], vec![0.0, 1.0, 7.0]]);

        let solution = jacobi(&system, &JacobiConfig::default()).unwrap();
        assert!(solution.converged);
        assert_eq!(solution.iterations, 2);
        assert_relative_eq!(solution.x[0], 5.0);
        assert_relative_eq!(solution.x[1], 7.0);
    }

    #[test]
    fn test_solver_trait_reports_no_convergence() {
        let solver: JacobiSolver<f64> = JacobiSolver::default();
        let system = LinearSystem::from_rows(vec![vec![1.0, 2.0, 3.0], vec![2.0, 1.0, 3.0]]);

        let err = solver.solve(&system).unwrap_err();
        assert!(matches!(
            err,
            SolveError::NoConvergence {
                max_iterations: 1000,
                ..
            }
        ));
    }

    #[test]
    fn test_repeated_solves_are_identical() {
        let system = LinearSystem::from_rows(vec![
            vec![4.0, -1.0, 0.0, 3.0],
            vec![-1.0, 4.0, -1.0, 3.0],
            vec![0.0, -1.0, 4.0, 3.0],
        ]);

        let first = jacobi(&system, &JacobiConfig::default()).unwrap();
        let second = jacobi(&system, &JacobiConfig::default()).unwrap();
        assert_eq!(first.x, second.x);
        assert_eq!(first.iterations, second.iterations);
    }
}
