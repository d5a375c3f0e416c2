//! lz-core: stable foundation for lorenzsim.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - state (phase-space State triple + component arithmetic)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod state;

// Re-exports: nice ergonomics for downstream crates
pub use error::{LzError, LzResult};
pub use numeric::*;
pub use state::State;
