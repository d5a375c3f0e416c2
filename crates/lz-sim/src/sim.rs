//! Simulation runner and trajectory recording.

use crate::error::{SimError, SimResult};
use crate::integrator::{ForwardEuler, Integrator};
use crate::model::DynamicalSystem;

/// Options for a fixed-step integration run.
#[derive(Clone, Copy, Debug)]
pub struct SimOptions {
    /// Start of the time span
    pub t_min: f64,
    /// End of the time span
    pub t_max: f64,
    /// Fixed time step
    pub h: f64,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            t_min: 0.0,
            t_max: 30.0,
            h: 1e-3,
        }
    }
}

impl SimOptions {
    /// Total sample count, including the seed sample at t_min.
    pub fn sample_count(&self) -> usize {
        ((self.t_max - self.t_min) / self.h).floor() as usize + 1
    }

    /// Reject configurations the integrator must not run with.
    pub fn validate(&self) -> SimResult<()> {
        if !self.h.is_finite() || self.h <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "h must be finite and positive",
            });
        }
        if !self.t_min.is_finite() || !self.t_max.is_finite() {
            return Err(SimError::InvalidArg {
                what: "time span must be finite",
            });
        }
        if self.t_max <= self.t_min {
            return Err(SimError::InvalidArg {
                what: "t_max must be greater than t_min",
            });
        }
        Ok(())
    }
}

/// Record of one integration run.
///
/// Samples are in strictly increasing time order, one per step, seed
/// included. Never mutated after `run_sim` returns it.
#[derive(Clone, Debug)]
pub struct Trajectory<S> {
    /// Time points, t[i] = t_min + i*h
    pub t: Vec<f64>,
    /// State snapshots
    pub x: Vec<S>,
}

impl<S> Trajectory<S> {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Iterate samples as (t, state) pairs.
    pub fn samples(&self) -> impl Iterator<Item = (f64, &S)> {
        self.t.iter().copied().zip(self.x.iter())
    }

    pub fn last(&self) -> Option<(f64, &S)> {
        Some((*self.t.last()?, self.x.last()?))
    }
}

/// Run a fixed-step forward Euler integration over the full span.
///
/// Sample 0 is `(t_min, initial)` with no integration applied. Each
/// subsequent sample depends only on its immediate predecessor.
/// Timestamps are computed from the sample index, not by running
/// accumulation, so reported times do not drift over long spans.
///
/// Non-finite states arising mid-run (divergent parameter/step choices)
/// are recorded as-is and do not stop the run; the result is either a
/// complete trajectory or an `InvalidArg` before any computation.
pub fn run_sim<M: DynamicalSystem>(
    system: &M,
    initial: M::State,
    opts: &SimOptions,
) -> SimResult<Trajectory<M::State>> {
    opts.validate()?;

    let n = opts.sample_count();
    tracing::debug!(t_min = opts.t_min, t_max = opts.t_max, h = opts.h, samples = n, "run_sim");

    let mut t_record = Vec::with_capacity(n);
    let mut x_record = Vec::with_capacity(n);

    t_record.push(opts.t_min);
    x_record.push(initial);

    let integrator = ForwardEuler;
    for i in 1..n {
        let t_prev = t_record[i - 1];
        let x_next = integrator.step(system, t_prev, &x_record[i - 1], opts.h)?;
        t_record.push(opts.t_min + i as f64 * opts.h);
        x_record.push(x_next);
    }

    Ok(Trajectory {
        t: t_record,
        x: x_record,
    })
}
