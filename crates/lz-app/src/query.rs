//! Query helpers for extracting data from loaded runs.

use lz_results::TrajectorySample;

use crate::error::{AppError, AppResult};

/// Summary of a run's time range and data.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub time_range: (f64, f64),
    pub sample_count: usize,
    pub final_state: (f64, f64, f64),
    pub all_finite: bool,
}

/// Get run summary from trajectory samples.
pub fn get_run_summary(samples: &[TrajectorySample]) -> AppResult<RunSummary> {
    let first = samples
        .first()
        .ok_or_else(|| AppError::InvalidInput("No samples in run".to_string()))?;
    let last = samples.last().unwrap_or(first);

    let all_finite = samples
        .iter()
        .all(|s| s.x.is_finite() && s.y.is_finite() && s.z.is_finite());

    Ok(RunSummary {
        time_range: (first.t, last.t),
        sample_count: samples.len(),
        final_state: (last.x, last.y, last.z),
        all_finite,
    })
}

/// Extract a single variable's time series from trajectory samples.
pub fn extract_series(samples: &[TrajectorySample], variable: &str) -> AppResult<Vec<(f64, f64)>> {
    let pick: fn(&TrajectorySample) -> f64 = match variable {
        "x" => |s| s.x,
        "y" => |s| s.y,
        "z" => |s| s.z,
        _ => {
            return Err(AppError::InvalidInput(format!(
                "Unknown variable: {} (expected x, y, or z)",
                variable
            )));
        }
    };

    Ok(samples.iter().map(|s| (s.t, pick(s))).collect())
}
