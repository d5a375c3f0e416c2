//! Scenario validation logic.

use crate::schema::{Project, ScenarioDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut scenario_ids = HashSet::new();
    for scenario in &project.scenarios {
        if !scenario_ids.insert(&scenario.id) {
            return Err(ValidationError::DuplicateId {
                id: scenario.id.clone(),
                context: "scenarios".to_string(),
            });
        }
        validate_scenario(scenario)?;
    }

    Ok(())
}

fn validate_scenario(scenario: &ScenarioDef) -> Result<(), ValidationError> {
    let ctx = &scenario.id;

    require_finite(scenario.params.sigma, ctx, "params.sigma")?;
    require_finite(scenario.params.rho, ctx, "params.rho")?;
    require_finite(scenario.params.beta, ctx, "params.beta")?;

    require_finite(scenario.initial_state.x, ctx, "initial_state.x")?;
    require_finite(scenario.initial_state.y, ctx, "initial_state.y")?;
    require_finite(scenario.initial_state.z, ctx, "initial_state.z")?;

    require_finite(scenario.span.t_min, ctx, "span.t_min")?;
    require_finite(scenario.span.t_max, ctx, "span.t_max")?;

    if scenario.span.t_max <= scenario.span.t_min {
        return Err(ValidationError::InvalidValue {
            field: format!("{ctx}.span"),
            value: format!("[{}, {}]", scenario.span.t_min, scenario.span.t_max),
            reason: "t_max must be greater than t_min".to_string(),
        });
    }

    require_finite(scenario.step_h, ctx, "step_h")?;
    if scenario.step_h <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("{ctx}.step_h"),
            value: scenario.step_h.to_string(),
            reason: "step size must be positive".to_string(),
        });
    }

    Ok(())
}

fn require_finite(value: f64, ctx: &str, field: &str) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: format!("{ctx}.{field}"),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ScenarioDef;

    fn project_with(scenarios: Vec<ScenarioDef>) -> Project {
        Project {
            version: 1,
            name: "test".to_string(),
            scenarios,
        }
    }

    #[test]
    fn default_scenario_is_valid() {
        let project = project_with(vec![ScenarioDef::with_defaults("classic", "Classic")]);
        assert!(validate_project(&project).is_ok());
    }

    #[test]
    fn duplicate_scenario_ids_rejected() {
        let project = project_with(vec![
            ScenarioDef::with_defaults("a", "First"),
            ScenarioDef::with_defaults("a", "Second"),
        ]);
        assert!(matches!(
            validate_project(&project),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn inverted_span_rejected() {
        let mut scenario = ScenarioDef::with_defaults("bad", "Bad span");
        scenario.span.t_min = 10.0;
        scenario.span.t_max = 5.0;
        assert!(validate_project(&project_with(vec![scenario])).is_err());
    }

    #[test]
    fn non_positive_step_rejected() {
        let mut scenario = ScenarioDef::with_defaults("bad", "Bad step");
        scenario.step_h = 0.0;
        assert!(validate_project(&project_with(vec![scenario])).is_err());
    }

    #[test]
    fn non_finite_initial_state_rejected() {
        let mut scenario = ScenarioDef::with_defaults("bad", "Bad state");
        scenario.initial_state.y = f64::NAN;
        assert!(validate_project(&project_with(vec![scenario])).is_err());
    }

    #[test]
    fn newer_version_rejected() {
        let mut project = project_with(vec![]);
        project.version = crate::migrate::LATEST_VERSION + 1;
        assert!(matches!(
            validate_project(&project),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }
}
