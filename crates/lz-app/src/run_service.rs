//! Run execution and caching service.

use std::path::Path;
use std::time::Instant;

use lz_core::State;
use lz_results::{RunManifest, RunStore, RunType, TrajectorySample, compute_run_id};
use lz_sim::{SimOptions, Trajectory, run_sim};

use crate::compile::{ScenarioRuntime, compile_scenario};
use crate::error::{AppError, AppResult};
use crate::project_service;

/// Run mode specification.
#[derive(Debug, Clone, Copy)]
pub enum RunMode {
    /// One pass over the scenario's full span.
    Full,
    /// Two chained passes split at t_mid, the second seeded from the
    /// first's final state.
    Split { t_mid: f64 },
}

/// Options for running simulations.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub solver_version: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            solver_version: "0.1.0".to_string(),
        }
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub project_path: &'a Path,
    pub scenario_id: &'a str,
    pub mode: RunMode,
    pub options: RunOptions,
}

/// Concise timing summary for a run.
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub compile_time_s: f64,
    pub solve_time_s: f64,
    pub save_time_s: f64,
    pub load_cache_time_s: f64,
    pub total_time_s: f64,
    pub steps: usize,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub loaded_from_cache: bool,
    pub timing: RunTimingSummary,
}

/// Execute or load a run based on request.
pub fn ensure_run(request: &RunRequest) -> AppResult<RunResponse> {
    let started = Instant::now();
    let mut timing = RunTimingSummary::default();

    let project = project_service::load_project(request.project_path)?;
    let scenario = project_service::get_scenario(&project, request.scenario_id)?;

    let compile_started = Instant::now();
    let runtime = compile_scenario(scenario)?;
    let run_type = run_type_for(&runtime.opts, request.mode)?;
    timing.compile_time_s = compile_started.elapsed().as_secs_f64();

    let run_id = compute_run_id(scenario, &run_type, &request.options.solver_version);
    let store = RunStore::for_project(request.project_path)?;

    if request.options.use_cache && store.has_run(&run_id) {
        let load_started = Instant::now();
        let manifest = store.load_manifest(&run_id)?;
        timing.load_cache_time_s = load_started.elapsed().as_secs_f64();
        timing.total_time_s = started.elapsed().as_secs_f64();

        return Ok(RunResponse {
            run_id,
            manifest,
            loaded_from_cache: true,
            timing,
        });
    }

    let solve_started = Instant::now();
    let samples = match request.mode {
        RunMode::Full => {
            let traj = run_sim(&runtime.system, runtime.initial, &runtime.opts)?;
            to_samples(&traj)
        }
        RunMode::Split { t_mid } => run_split(&runtime, t_mid)?,
    };
    timing.solve_time_s = solve_started.elapsed().as_secs_f64();
    timing.steps = samples.len().saturating_sub(1);

    let manifest = RunManifest {
        run_id: run_id.clone(),
        scenario_id: scenario.id.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        run_type,
        solver_version: request.options.solver_version.clone(),
    };

    let save_started = Instant::now();
    store.save_run(&manifest, &samples)?;
    timing.save_time_s = save_started.elapsed().as_secs_f64();
    timing.total_time_s = started.elapsed().as_secs_f64();

    Ok(RunResponse {
        run_id,
        manifest,
        loaded_from_cache: false,
        timing,
    })
}

/// List cached runs for a scenario.
pub fn list_runs(project_path: &Path, scenario_id: &str) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::for_project(project_path)?;
    Ok(store.list_runs(scenario_id)?)
}

/// Load a cached run's manifest and trajectory.
pub fn load_run(
    project_path: &Path,
    run_id: &str,
) -> AppResult<(RunManifest, Vec<TrajectorySample>)> {
    let store = RunStore::for_project(project_path)?;
    let manifest = store
        .load_manifest(run_id)
        .map_err(|_| AppError::RunNotFound(run_id.to_string()))?;
    let samples = store.load_trajectory(run_id)?;
    Ok((manifest, samples))
}

fn run_type_for(opts: &SimOptions, mode: RunMode) -> AppResult<RunType> {
    match mode {
        RunMode::Full => Ok(RunType::FixedStep {
            h: opts.h,
            t_min: opts.t_min,
            t_max: opts.t_max,
            samples: opts.sample_count(),
        }),
        RunMode::Split { t_mid } => {
            if !t_mid.is_finite() || t_mid <= opts.t_min || t_mid >= opts.t_max {
                return Err(AppError::InvalidInput(format!(
                    "t_mid must lie strictly inside [{}, {}]",
                    opts.t_min, opts.t_max
                )));
            }
            let first = SimOptions {
                t_max: t_mid,
                ..*opts
            };
            let second = SimOptions {
                t_min: t_mid,
                ..*opts
            };
            Ok(RunType::Segmented {
                h: opts.h,
                t_min: opts.t_min,
                t_mid,
                t_max: opts.t_max,
                // Seam sample stored once
                samples: first.sample_count() + second.sample_count() - 1,
            })
        }
    }
}

/// Two-segment run: integrate up to t_mid, restart from the final state.
///
/// The second segment's seed duplicates the first segment's last sample;
/// it is dropped so stored timestamps stay strictly increasing.
fn run_split(runtime: &ScenarioRuntime, t_mid: f64) -> AppResult<Vec<TrajectorySample>> {
    let first_opts = SimOptions {
        t_max: t_mid,
        ..runtime.opts
    };
    let first = run_sim(&runtime.system, runtime.initial, &first_opts)?;

    let (_, warm_start) = first
        .last()
        .ok_or_else(|| AppError::Simulation("empty first segment".to_string()))?;
    let warm_start = *warm_start;

    let second_opts = SimOptions {
        t_min: t_mid,
        ..runtime.opts
    };
    let second = run_sim(&runtime.system, warm_start, &second_opts)?;

    let mut samples = to_samples(&first);
    samples.extend(to_samples(&second).into_iter().skip(1));
    Ok(samples)
}

fn to_samples(traj: &Trajectory<State>) -> Vec<TrajectorySample> {
    traj.samples()
        .map(|(t, s)| TrajectorySample {
            t,
            x: s.x,
            y: s.y,
            z: s.z,
        })
        .collect()
}
