//! Core traits for the solver library
//!
//! This module defines the two abstractions shared by both solvers:
//! - [`RealField`]: Trait for scalar coefficient types
//! - [`LinearSolver`]: Common solve interface implemented by every method

use crate::error::SolveError;
use crate::system::LinearSystem;
use ndarray::Array1;
use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for scalar types that can be used as equation coefficients.
///
/// Bundles the floating-point bounds every solver needs. Complex
/// coefficients are out of scope, so this stays a real-number trait.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for most systems)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Debug + Send + Sync + 'static
{
}

impl RealField for f64 {}
impl RealField for f32 {}

/// Common interface for linear-system solvers.
///
/// Both the direct and the iterative method expose the same capability:
/// borrow a system read-only, produce a fresh solution vector or a typed
/// error. Implementors carry no mutable state, so one solver value can
/// serve many systems, including from different threads.
pub trait LinearSolver<T: RealField>: Send + Sync {
    /// Solve Ax = b for the given augmented system.
    fn solve(&self, system: &LinearSystem<T>) -> Result<Array1<T>, SolveError>;
}
