//! Fixed-step time integrators.

use crate::error::SimResult;
use crate::model::DynamicalSystem;

/// Trait for time integrators.
pub trait Integrator {
    /// Advance state by one time step.
    fn step<M: DynamicalSystem>(
        &self,
        system: &M,
        t: f64,
        x: &M::State,
        h: f64,
    ) -> SimResult<M::State>;
}

/// Forward Euler (explicit, 1st order): x_new = x + h * rhs(t, x).
/// One rhs() call per step.
#[derive(Clone, Debug)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: DynamicalSystem>(
        &self,
        system: &M,
        t: f64,
        x: &M::State,
        h: f64,
    ) -> SimResult<M::State> {
        let xdot = system.rhs(t, x)?;
        Ok(system.add(x, &system.scale(&xdot, h)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{LorenzParams, LorenzSystem};
    use lz_core::State;

    #[test]
    fn single_euler_step_from_classic_seed() {
        let sys = LorenzSystem::new(LorenzParams::default());
        let x0 = State::new(10.0, 10.0, 10.0);

        let x1 = ForwardEuler.step(&sys, 0.0, &x0, 0.001).unwrap();

        assert_eq!(x1.x, 10.0);
        assert!((x1.y - 9.928).abs() < 1e-12);
        assert!((x1.z - (10.0 + 0.001 * 220.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn zero_derivative_is_a_fixed_point() {
        let sys = LorenzSystem::new(LorenzParams::default());
        let origin = State::new(0.0, 0.0, 0.0);
        let next = ForwardEuler.step(&sys, 0.0, &origin, 0.5).unwrap();
        assert_eq!(next, origin);
    }
}
