//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while loading a workout plan.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlanError {
    #[error("failed to read plan {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid plan {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
