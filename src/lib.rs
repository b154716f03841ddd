//! Dense solvers for square systems of linear equations
//!
//! This crate solves augmented-matrix systems Ax = b with two independent
//! methods behind a common interface:
//!
//! # Features
//!
//! - **Direct**: Gaussian elimination with partial pivoting and
//!   back-substitution - exact up to rounding for any non-singular system
//! - **Iterative**: Jacobi iteration - converges for diagonally dominant
//!   systems, with configurable tolerance and iteration budget
//! - **Input parsing**: blank-line-separated blocks of whitespace-separated
//!   rows, as produced by the `solve_systems` driver's input files
//! - **Generic Scalar Types**: Works with f64, f32
//!
//! # Example
//!
//! ```
//! use linsys::{GaussianConfig, LinearSystem, gaussian_solve};
//!
//! // 2x + y = 5, x + 3y = 10
//! let system: LinearSystem<f64> = LinearSystem::from_rows(vec![
//!     vec![2.0, 1.0, 5.0],
//!     vec![1.0, 3.0, 10.0],
//! ]);
//!
//! let x = gaussian_solve(&system, &GaussianConfig::default())?;
//! assert!((x[0] - 1.0).abs() < 1e-10);
//! assert!((x[1] - 3.0).abs() < 1e-10);
//! # Ok::<(), linsys::SolveError>(())
//! ```

pub mod direct;
pub mod error;
pub mod iterative;
pub mod parse;
pub mod system;
pub mod traits;

// Re-export main types
pub use error::SolveError;
pub use system::LinearSystem;
pub use traits::{LinearSolver, RealField};

// Re-export direct solvers
pub use direct::{GaussianConfig, GaussianSolver, gaussian_solve};

// Re-export iterative solvers
pub use iterative::{JacobiConfig, JacobiSolution, JacobiSolver, jacobi};

// Re-export input parsing
pub use parse::{ParseError, parse_systems};
