//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while setting up or running an integration.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<lz_core::LzError> for SimError {
    fn from(e: lz_core::LzError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}
