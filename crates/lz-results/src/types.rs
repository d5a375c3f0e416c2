//! Result data types.

use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub scenario_id: String,
    pub timestamp: String,
    pub run_type: RunType,
    pub solver_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum RunType {
    /// One fixed-step pass over the whole span.
    FixedStep {
        h: f64,
        t_min: f64,
        t_max: f64,
        samples: usize,
    },
    /// Two chained passes, the second seeded from the first's final state.
    Segmented {
        h: f64,
        t_min: f64,
        t_mid: f64,
        t_max: f64,
        samples: usize,
    },
}

/// One stored trajectory sample. Plain f64 columns in export order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
