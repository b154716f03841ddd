//! System of equations in augmented form
//!
//! A [`LinearSystem`] owns the rows exactly as supplied by the caller or the
//! parser, jagged or not. Shape validation is part of the solve contract, so
//! construction never fails; both solvers call [`LinearSystem::validate`]
//! before touching the coefficients.

use crate::error::SolveError;
use crate::traits::RealField;
use ndarray::Array2;

/// A square system of linear equations, one row per equation.
///
/// Each row holds the n variable coefficients followed by the right-hand-side
/// constant, so a valid n-equation system has rows of length n+1.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem<T> {
    rows: Vec<Vec<T>>,
}

impl<T: RealField> LinearSystem<T> {
    /// Create a system from raw equation rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }

    /// Number of equations (and of variables, when the shape is valid).
    pub fn num_equations(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the system has no equations.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrow the raw equation rows.
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Check that every row has exactly n+1 coefficients.
    ///
    /// Returns the system size n on success. An empty system passes this
    /// check vacuously; the iterative solver applies its own degeneracy
    /// guard on top.
    pub fn validate(&self) -> Result<usize, SolveError> {
        let n = self.rows.len();
        for (row, coefficients) in self.rows.iter().enumerate() {
            if coefficients.len() != n + 1 {
                return Err(SolveError::ShapeMismatch {
                    row,
                    expected: n + 1,
                    got: coefficients.len(),
                });
            }
        }
        Ok(n)
    }

    /// Copy the coefficients into a fresh n×(n+1) working matrix.
    ///
    /// The system must have passed [`validate`](Self::validate); shorter rows
    /// would panic here.
    pub fn to_augmented(&self) -> Array2<T> {
        let n = self.rows.len();
        let mut matrix = Array2::from_elem((n, n + 1), T::zero());
        for (i, row) in self.rows.iter().enumerate() {
            for j in 0..=n {
                matrix[[i, j]] = row[j];
            }
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_validate_square_system() {
        let system = LinearSystem::from_rows(vec![vec![2.0, 1.0, 4.0], vec![1.0, -1.0, 1.0]]);
        assert_eq!(system.validate().unwrap(), 2);
    }

    #[test]
    fn test_validate_reports_offending_row() {
        let system = LinearSystem::from_rows(vec![vec![2.0, 1.0, 4.0], vec![1.0, -1.0]]);
        let err = system.validate().unwrap_err();
        match err {
            SolveError::ShapeMismatch { row, expected, got } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 3);
                assert_eq!(got, 2);
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_system() {
        let system: LinearSystem<f64> = LinearSystem::from_rows(vec![]);
        assert_eq!(system.validate().unwrap(), 0);
    }

    #[test]
    fn test_to_augmented_copies_coefficients() {
        let system = LinearSystem::from_rows(vec![vec![4.0, -1.0, 3.0], vec![-1.0, 4.0, 3.0]]);
        let matrix = system.to_augmented();
        assert_eq!(matrix.dim(), (2, 3));
        assert_relative_eq!(matrix[[0, 0]], 4.0);
        assert_relative_eq!(matrix[[1, 2]], 3.0);
    }

    #[test]
    fn test_to_augmented_is_a_copy() {
        let system = LinearSystem::from_rows(vec![vec![1.0, 2.0]]);
        let mut matrix = system.to_augmented();
        matrix[[0, 0]] = 99.0;
        assert_relative_eq!(system.rows()[0][0], 1.0);
    }
}
