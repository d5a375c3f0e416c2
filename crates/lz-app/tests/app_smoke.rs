//! Smoke tests for the project service layer.

use lz_app::{get_scenario, list_scenarios, load_project, validate_project};
use lz_project::schema::{Project, ScenarioDef};

#[test]
fn list_and_get_scenarios() {
    let project = Project {
        version: 1,
        name: "Smoke".to_string(),
        scenarios: vec![
            ScenarioDef::with_defaults("classic", "Classic attractor"),
            ScenarioDef::with_defaults("other", "Other"),
        ],
    };

    let summaries = list_scenarios(&project);
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, "classic");
    assert_eq!(summaries[0].t_max, 30.0);
    assert_eq!(summaries[0].step_h, 1e-3);

    assert!(get_scenario(&project, "other").is_ok());
    assert!(get_scenario(&project, "missing").is_err());
}

#[test]
fn validate_requires_a_scenario() {
    let empty = Project {
        version: 1,
        name: "Empty".to_string(),
        scenarios: vec![],
    };
    assert!(validate_project(&empty).is_err());
}

#[test]
fn load_reports_missing_file() {
    let path = std::env::temp_dir().join("lz_app_no_such_project.yaml");
    let _ = std::fs::remove_file(&path);
    assert!(load_project(&path).is_err());
}
