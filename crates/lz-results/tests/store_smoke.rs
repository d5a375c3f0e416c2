use lz_results::*;

fn sample_trajectory() -> Vec<TrajectorySample> {
    vec![
        TrajectorySample {
            t: 0.0,
            x: 10.0,
            y: 10.0,
            z: 10.0,
        },
        TrajectorySample {
            t: 0.001,
            x: 10.0,
            y: 9.928,
            z: 10.073333333333333,
        },
    ]
}

#[test]
fn save_and_load_run() {
    let temp_dir = std::env::temp_dir().join("lz_results_test");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RunStore::new(temp_dir.clone()).unwrap();

    let manifest = RunManifest {
        run_id: "test_run_123".to_string(),
        scenario_id: "classic".to_string(),
        timestamp: "2026-08-07T12:00:00Z".to_string(),
        run_type: RunType::FixedStep {
            h: 0.001,
            t_min: 0.0,
            t_max: 0.001,
            samples: 2,
        },
        solver_version: "v1".to_string(),
    };

    store.save_run(&manifest, &sample_trajectory()).unwrap();

    let loaded_manifest = store.load_manifest("test_run_123").unwrap();
    assert_eq!(loaded_manifest.run_id, manifest.run_id);
    assert_eq!(loaded_manifest.run_type, manifest.run_type);

    let loaded = store.load_trajectory("test_run_123").unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].t, 0.0);
    assert!((loaded[1].y - 9.928).abs() < 1e-12);
}

#[test]
fn list_runs_by_scenario() {
    let temp_dir = std::env::temp_dir().join("lz_results_test_list");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RunStore::new(temp_dir.clone()).unwrap();

    for (run_id, scenario_id) in [("run1", "classic"), ("run2", "classic"), ("run3", "damped")] {
        let manifest = RunManifest {
            run_id: run_id.to_string(),
            scenario_id: scenario_id.to_string(),
            timestamp: "2026-08-07T12:00:00Z".to_string(),
            run_type: RunType::FixedStep {
                h: 0.001,
                t_min: 0.0,
                t_max: 0.001,
                samples: 2,
            },
            solver_version: "v1".to_string(),
        };
        store.save_run(&manifest, &sample_trajectory()).unwrap();
    }

    let classic_runs = store.list_runs("classic").unwrap();
    assert_eq!(classic_runs.len(), 2);

    let damped_runs = store.list_runs("damped").unwrap();
    assert_eq!(damped_runs.len(), 1);
    assert_eq!(damped_runs[0].run_id, "run3");
}

#[test]
fn missing_run_reports_not_found() {
    let temp_dir = std::env::temp_dir().join("lz_results_test_missing");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RunStore::new(temp_dir).unwrap();
    assert!(!store.has_run("nope"));
    assert!(matches!(
        store.load_manifest("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));
    assert!(matches!(
        store.load_trajectory("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));
}

#[test]
fn delete_run_removes_directory() {
    let temp_dir = std::env::temp_dir().join("lz_results_test_delete");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RunStore::new(temp_dir).unwrap();
    let manifest = RunManifest {
        run_id: "doomed".to_string(),
        scenario_id: "classic".to_string(),
        timestamp: "2026-08-07T12:00:00Z".to_string(),
        run_type: RunType::FixedStep {
            h: 0.001,
            t_min: 0.0,
            t_max: 0.001,
            samples: 2,
        },
        solver_version: "v1".to_string(),
    };
    store.save_run(&manifest, &sample_trajectory()).unwrap();
    assert!(store.has_run("doomed"));

    store.delete_run("doomed").unwrap();
    assert!(!store.has_run("doomed"));
}
