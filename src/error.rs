//! Error types for the linear-system solvers.
//!
//! All failure modes are explicit enum variants so callers can branch on
//! kind instead of matching message text.

use thiserror::Error;

/// Errors that can occur while solving a system of equations.
#[derive(Debug, Error)]
pub enum SolveError {
    /// A row does not have exactly n+1 coefficients for an n-equation system.
    #[error("each equation must have exactly {expected} coefficients, but row {row} has {got}")]
    ShapeMismatch {
        /// Index of the offending row
        row: usize,
        /// Expected row length (n + 1)
        expected: usize,
        /// Actual row length
        got: usize,
    },

    /// The system contains no equations.
    #[error("invalid system of equations")]
    EmptySystem,

    /// Elimination settled on a pivot too small to divide by.
    #[error("matrix is singular or nearly singular (pivot {pivot:e} in column {column})")]
    SingularMatrix {
        /// Pivot column at which elimination broke down
        column: usize,
        /// Magnitude of the offending pivot
        pivot: f64,
    },

    /// The iteration budget ran out before the tolerance was met.
    #[error("did not converge within the maximum number of {max_iterations} iterations")]
    NoConvergence {
        /// The exhausted iteration budget
        max_iterations: usize,
        /// Largest per-component change at the final iteration
        last_diff: f64,
    },
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolveError>;

impl SolveError {
    /// Returns `true` if this error was detected before any computation.
    ///
    /// This includes `ShapeMismatch` and `EmptySystem` variants.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            SolveError::ShapeMismatch { .. } | SolveError::EmptySystem
        )
    }

    /// Returns `true` if this error arose from the numerics of the method.
    ///
    /// This includes `SingularMatrix` and `NoConvergence` variants.
    pub fn is_numeric_error(&self) -> bool {
        matches!(
            self,
            SolveError::SingularMatrix { .. } | SolveError::NoConvergence { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = SolveError::ShapeMismatch {
            row: 1,
            expected: 3,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "each equation must have exactly 3 coefficients, but row 1 has 2"
        );
    }

    #[test]
    fn test_no_convergence_display() {
        let err = SolveError::NoConvergence {
            max_iterations: 1000,
            last_diff: 0.5,
        };
        assert_eq!(
            err.to_string(),
            "did not converge within the maximum number of 1000 iterations"
        );
    }

    #[test]
    fn test_is_shape_error() {
        let shape_err = SolveError::ShapeMismatch {
            row: 0,
            expected: 4,
            got: 3,
        };
        let numeric_err = SolveError::SingularMatrix {
            column: 1,
            pivot: 0.0,
        };

        assert!(shape_err.is_shape_error());
        assert!(SolveError::EmptySystem.is_shape_error());
        assert!(!numeric_err.is_shape_error());
    }

    #[test]
    fn test_is_numeric_error() {
        let numeric_err = SolveError::NoConvergence {
            max_iterations: 10,
            last_diff: 1.0,
        };
        let shape_err = SolveError::EmptySystem;

        assert!(numeric_err.is_numeric_error());
        assert!(!shape_err.is_numeric_error());
    }
}
