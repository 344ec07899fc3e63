//! Error types for the billhours server.
//!
//! Domain-specific error enums (`UploadError`, `PipelineError`, `WorkerError`,
//! `ConfigError`) are aggregated into a single [`Error`] type. All errors use
//! `thiserror` and implement `IntoResponse` so axum handlers can bubble them
//! up with `?`.

pub mod config;
pub mod pipeline;
pub mod upload;
pub mod worker;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{
        config::ConfigError, pipeline::PipelineError, upload::UploadError, worker::WorkerError,
    },
    model::api::ErrorDto,
};

/// Main error type for the billhours server.
///
/// Aggregates the domain error enums and external library errors, with
/// `#[from]` conversions so the `?` operator works across module boundaries.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Upload validation error (missing file, wrong format, bad header).
    #[error(transparent)]
    UploadError(#[from] UploadError),
    /// Processing error raised during ingestion or summary computation.
    #[error(transparent)]
    PipelineError(#[from] PipelineError),
    /// Worker queue error (connection, enqueue failures).
    #[error(transparent)]
    WorkerError(#[from] WorkerError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::UploadError(err) => err.into_response(),
            Self::PipelineError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error for debugging but returns a generic message to the
/// client so internal details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
