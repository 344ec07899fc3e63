use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Admission-time validation errors for an uploaded CSV file.
///
/// These are reported synchronously to the uploader; no file record exists
/// yet when any of them fires. The variants are checked in declaration order
/// and validation short-circuits on the first failure.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("No file was uploaded.")]
    NoFileUploaded,
    #[error("File is not in CSV format. Please upload a CSV file.")]
    WrongFormat,
    #[error("File is empty.")]
    EmptyFile,
    #[error("Failed to read CSV file: {0}")]
    ReadError(String),
    #[error("CSV file does not contain a header or does not conform to the guidelines! Please read the guidelines.")]
    MissingHeader,
    #[error("Invalid CSV file. Please ensure the file has the correct headers in their right/specified order.")]
    InvalidHeader,
    #[error("CSV file contains only the header.")]
    HeaderOnly,
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        tracing::debug!("rejected upload: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
