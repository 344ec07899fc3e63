use axum::response::{IntoResponse, Response};
use thiserror::Error;
use uuid::Uuid;

use crate::error::InternalServerError;

/// Errors raised while ingesting a file's rows or computing its summary.
///
/// Any of these aborts the whole file's run: ingestion rolls back every
/// record created for the file and the file transitions to FAILED carrying
/// the error's display text as its `error_message`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PipelineError {
    /// No timesheet file exists for the requested id.
    #[error("File {0} was not found.")]
    FileNotFound(Uuid),
    /// A date or time field did not match the strict `YYYY-MM-DD` / `HH:MM`
    /// formats.
    #[error("Date/Time format error in row: {row:?}")]
    DateTimeFormat { row: String },
    /// A non-blank row could not be converted into a billing record.
    #[error("Malformed row {row:?}: {reason}")]
    MalformedRow { row: String, reason: String },
    /// The same employee appeared twice in one file with two different rates.
    #[error("Billable rate for employee {employee_id} in same file can't have two different values")]
    ConflictingRate { employee_id: i64 },
    /// Summary computation was requested before the file reached LOADED.
    #[error("File {0} has not been loaded yet.")]
    NotYetLoaded(Uuid),
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        // Pipeline errors surface to HTTP callers only through the stored
        // file status; reaching this path directly is unexpected.
        InternalServerError(self).into_response()
    }
}
