//! Scenario file loading, saving, validation, and introspection.

use std::path::Path;
use lz_project::schema::{Project, ScenarioDef};

use crate::error::{AppError, AppResult};

/// Summary of a scenario for listing.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
    pub t_min: f64,
    pub t_max: f64,
    pub step_h: f64,
}

/// Load a project from a YAML file (migrated and validated).
pub fn load_project(path: &Path) -> AppResult<Project> {
    if !path.exists() {
        return Err(AppError::ProjectFileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
    }
    let project = lz_project::load_yaml(path)?;
    Ok(project)
}

/// Save a project to a YAML file.
pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    lz_project::save_yaml(path, project)?;
    Ok(())
}

/// Validate project structure.
pub fn validate_project(project: &Project) -> AppResult<()> {
    lz_project::validate_project(project)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if project.scenarios.is_empty() {
        return Err(AppError::Validation(
            "Project must have at least one scenario".to_string(),
        ));
    }

    Ok(())
}

/// List all scenarios in the project with summaries.
pub fn list_scenarios(project: &Project) -> Vec<ScenarioSummary> {
    project
        .scenarios
        .iter()
        .map(|scenario| ScenarioSummary {
            id: scenario.id.clone(),
            name: scenario.name.clone(),
            t_min: scenario.span.t_min,
            t_max: scenario.span.t_max,
            step_h: scenario.step_h,
        })
        .collect()
}

/// Get a specific scenario by ID.
pub fn get_scenario<'a>(project: &'a Project, scenario_id: &str) -> AppResult<&'a ScenarioDef> {
    project
        .scenarios
        .iter()
        .find(|s| s.id == scenario_id)
        .ok_or_else(|| AppError::ScenarioNotFound(scenario_id.to_string()))
}
