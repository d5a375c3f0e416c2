//! Lorenz vector field.

use lz_core::State;

use crate::error::SimResult;
use crate::model::DynamicalSystem;

/// Physical parameters of the Lorenz system.
///
/// Passed explicitly into the field and the integrator; never global
/// state. Read-only for the duration of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LorenzParams {
    /// Prandtl number (sigma)
    pub sigma: f64,
    /// Rayleigh number (rho)
    pub rho: f64,
    /// Geometric factor (beta)
    pub beta: f64,
}

impl Default for LorenzParams {
    /// The classic chaotic parameter set.
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

/// Instantaneous derivative of the Lorenz system at `state`.
///
/// Defined for all real triples; non-finite inputs produce non-finite
/// outputs and are passed through, not trapped.
pub fn derivative(state: State, params: LorenzParams) -> State {
    State {
        x: -params.sigma * (state.x - state.y),
        y: -state.x * state.z + params.rho * state.x - state.y,
        z: state.x * state.y - params.beta * state.z,
    }
}

/// The Lorenz system as a DynamicalSystem.
#[derive(Clone, Copy, Debug)]
pub struct LorenzSystem {
    pub params: LorenzParams,
}

impl LorenzSystem {
    pub fn new(params: LorenzParams) -> Self {
        Self { params }
    }
}

impl DynamicalSystem for LorenzSystem {
    type State = State;

    fn rhs(&self, _t: f64, x: &State) -> SimResult<State> {
        // Autonomous: the field does not depend on t.
        Ok(derivative(*x, self.params))
    }

    fn add(&self, a: &State, b: &State) -> State {
        a.add(*b)
    }

    fn scale(&self, a: &State, scale: f64) -> State {
        a.scale(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivative_at_classic_seed() {
        let xdot = derivative(State::new(10.0, 10.0, 10.0), LorenzParams::default());
        assert_eq!(xdot.x, 0.0);
        assert_eq!(xdot.y, -72.0);
        // 100 - 80/3
        assert!((xdot.z - 220.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn derivative_at_origin_is_zero() {
        let xdot = derivative(State::new(0.0, 0.0, 0.0), LorenzParams::default());
        assert_eq!(xdot, State::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn non_finite_input_passes_through() {
        let xdot = derivative(State::new(f64::NAN, 1.0, 1.0), LorenzParams::default());
        assert!(!xdot.is_finite());
    }

    #[test]
    fn rhs_matches_free_function() {
        let sys = LorenzSystem::new(LorenzParams::default());
        let x = State::new(1.5, -2.0, 20.0);
        let via_trait = sys.rhs(0.0, &x).unwrap();
        assert_eq!(via_trait, derivative(x, sys.params));
    }
}
