// src/strength/error.rs
use thiserror::Error;

/// Anything that keeps a check from producing a parsed 2xx response.
#[derive(Error, Debug)]
pub enum StrengthCheckError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Evaluator returned status {status}")]
    Status { status: u16, body: String },

    #[error("Malformed evaluator response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StrengthCheckError>;
