//! Iterative solvers for linear systems
//!
//! This module provides fixed-point methods:
//! - [`jacobi`]: Jacobi iteration - converges for diagonally dominant systems

mod jacobi;

pub use jacobi::{JacobiConfig, JacobiSolution, JacobiSolver, jacobi};
