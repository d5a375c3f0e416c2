//! Fixed-step simulation of the Lorenz system.
//!
//! Provides:
//! - Lorenz vector field with explicit, injectable parameters
//! - DynamicalSystem trait for pluggable autonomous systems
//! - Fixed-step forward Euler integrator
//! - Trajectory recording with index-based timestamps

pub mod error;
pub mod field;
pub mod integrator;
pub mod model;
pub mod sim;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use field::{LorenzParams, LorenzSystem, derivative};
pub use integrator::{ForwardEuler, Integrator};
pub use model::DynamicalSystem;
pub use sim::{SimOptions, Trajectory, run_sim};
