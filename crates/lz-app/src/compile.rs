//! Runtime compilation of scenario definitions into executable models.

use lz_core::State;
use lz_project::schema::ScenarioDef;
use lz_sim::{LorenzParams, LorenzSystem, SimOptions};

use crate::error::{AppError, AppResult};

/// Runtime representation of a compiled scenario.
pub struct ScenarioRuntime {
    pub system: LorenzSystem,
    pub initial: State,
    pub opts: SimOptions,
}

/// Compile a scenario definition into runtime structures.
///
/// Re-checks the integrator preconditions so a runtime built from an
/// unvalidated def still fails here rather than mid-run.
pub fn compile_scenario(scenario: &ScenarioDef) -> AppResult<ScenarioRuntime> {
    let params = LorenzParams {
        sigma: scenario.params.sigma,
        rho: scenario.params.rho,
        beta: scenario.params.beta,
    };

    let initial = State::new(
        scenario.initial_state.x,
        scenario.initial_state.y,
        scenario.initial_state.z,
    );
    initial
        .ensure_finite("initial state")
        .map_err(|e| AppError::Compile(e.to_string()))?;

    let opts = SimOptions {
        t_min: scenario.span.t_min,
        t_max: scenario.span.t_max,
        h: scenario.step_h,
    };
    opts.validate()
        .map_err(|e| AppError::Compile(e.to_string()))?;

    Ok(ScenarioRuntime {
        system: LorenzSystem::new(params),
        initial,
        opts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lz_project::schema::ScenarioDef;

    #[test]
    fn compiles_default_scenario() {
        let runtime = compile_scenario(&ScenarioDef::with_defaults("classic", "Classic")).unwrap();
        assert_eq!(runtime.system.params.sigma, 10.0);
        assert_eq!(runtime.initial, State::new(10.0, 10.0, 10.0));
        assert_eq!(runtime.opts.h, 1e-3);
        assert_eq!(runtime.opts.sample_count(), 30_001);
    }

    #[test]
    fn rejects_non_finite_initial_state() {
        let mut scenario = ScenarioDef::with_defaults("bad", "Bad");
        scenario.initial_state.x = f64::INFINITY;
        assert!(matches!(
            compile_scenario(&scenario),
            Err(AppError::Compile(_))
        ));
    }

    #[test]
    fn rejects_bad_step() {
        let mut scenario = ScenarioDef::with_defaults("bad", "Bad");
        scenario.step_h = -0.001;
        assert!(matches!(
            compile_scenario(&scenario),
            Err(AppError::Compile(_))
        ));
    }
}
