//! DynamicalSystem trait for pluggable ODE systems.

use crate::error::SimResult;

/// Trait for autonomous dynamical systems x_dot = f(t, x).
///
/// A DynamicalSystem must implement:
/// - State type (Clone, for trajectory snapshots)
/// - RHS (right-hand side) computation: x_dot = f(t, x)
/// - Scalar field arithmetic for integration: add states, scale by scalar
///
/// `rhs` takes `&self`: evaluating the field must not mutate the system,
/// so the same system value can drive any number of runs.
pub trait DynamicalSystem {
    /// State type (must be Clone).
    type State: Clone;

    /// Compute state derivative xdot = f(t, x).
    fn rhs(&self, t: f64, x: &Self::State) -> SimResult<Self::State>;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: f64) -> Self::State;
}
