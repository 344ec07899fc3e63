use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::InternalServerError;

/// Worker queue error type.
///
/// These indicate issues with the background job system rather than client
/// errors, so they always map to a 500 response.
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Failed to connect to the Redis-backed job storage.
    #[error("Failed to connect to job storage: {0}")]
    Connect(String),
    /// Failed to enqueue a job.
    #[error("Failed to enqueue job: {0}")]
    Enqueue(String),
}

impl IntoResponse for WorkerError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
