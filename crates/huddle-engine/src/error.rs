//! Error types for the availability engine's validated entry points.
//!
//! The interval algebra itself is unchecked; these errors are produced at the
//! boundary (checked constructors, config validation, JSON parsing).

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Empty window: end {end} is not after start {start}")]
    EmptyWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid timestamp '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
