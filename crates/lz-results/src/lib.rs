//! lz-results: run cache, trajectory storage, and export.

pub mod export;
pub mod gnuplot;
pub mod hash;
pub mod store;
pub mod types;

pub use export::{format_trajectory, parse_trajectory, write_trajectory};
pub use gnuplot::GnuplotScript;
pub use hash::compute_run_id;
pub use store::RunStore;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Run not found: {run_id}")]
    RunNotFound { run_id: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    #[error("Malformed trajectory data at line {line}: {message}")]
    Parse { line: usize, message: String },
}
