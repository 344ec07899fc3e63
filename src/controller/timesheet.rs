use apalis::prelude::Storage;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    data::{invoice_summary::InvoiceSummaryRepository, timesheet_file::TimesheetFileRepository},
    error::{upload::UploadError, worker::WorkerError, Error},
    model::{
        api::{ErrorDto, FileStatusDto, SummaryDto, UploadedDto},
        app::AppState,
        worker::WorkerJob,
    },
    service::csv::validator::{validate, RawUpload},
};

pub static TIMESHEET_TAG: &str = "timesheet";

/// The multipart part name carrying the CSV file.
static UPLOAD_FIELD: &str = "csvFile";

/// Upload a timesheet CSV for background processing
///
/// The file is validated for shape only (header and presence of rows); row
/// contents are checked later by the ingestion worker. On success the file
/// is stored PENDING and an ingestion job is queued.
#[utoipa::path(
    post,
    path = "/api/timesheets",
    tag = TIMESHEET_TAG,
    responses(
        (status = 200, description = "File admitted, processing commenced", body = UploadedDto),
        (status = 400, description = "Upload failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_timesheet(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::ReadError(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| UploadError::ReadError(e.to_string()))?;

        upload = Some(RawUpload {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let Some(upload) = upload else {
        return Err(UploadError::NoFileUploaded.into());
    };

    validate(Some(&upload))?;

    let file = TimesheetFileRepository::new(&state.db)
        .create(&upload.filename, upload.bytes)
        .await?;

    let mut jobs = state.jobs.clone();
    jobs.push(WorkerJob::IngestFile { file_id: file.id })
        .await
        .map_err(|e| WorkerError::Enqueue(e.to_string()))?;

    tracing::debug!("Queued ingestion for uploaded file {}", file.id);

    Ok((
        StatusCode::OK,
        axum::Json(UploadedDto {
            message: "File uploaded successfully. Processing commenced.".to_string(),
            file_id: file.id,
        }),
    )
        .into_response())
}

/// Get the processing status of an uploaded file
#[utoipa::path(
    get,
    path = "/api/timesheets/{id}/status",
    tag = TIMESHEET_TAG,
    params(
        ("id" = Uuid, Path, description = "File id returned by the upload endpoint")
    ),
    responses(
        (status = 200, description = "Current file status", body = FileStatusDto),
        (status = 404, description = "File not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let file = TimesheetFileRepository::new(&state.db).get(id).await?;

    let Some(file) = file else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: format!("File {id} was not found."),
            }),
        )
            .into_response());
    };

    Ok((
        StatusCode::OK,
        axum::Json(FileStatusDto {
            status: file.status,
            error_message: file.error_message,
        }),
    )
        .into_response())
}

/// Get the invoice summary computed for a processed file
#[utoipa::path(
    get,
    path = "/api/timesheets/{id}/summary",
    tag = TIMESHEET_TAG,
    params(
        ("id" = Uuid, Path, description = "File id returned by the upload endpoint")
    ),
    responses(
        (status = 200, description = "Computed invoice summary", body = SummaryDto),
        (status = 404, description = "No summary available for this file", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let summary = InvoiceSummaryRepository::new(&state.db).get_by_file(id).await?;

    let Some(summary) = summary else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: format!("Summary for file {id} is not available yet."),
            }),
        )
            .into_response());
    };

    Ok((
        StatusCode::OK,
        axum::Json(SummaryDto {
            file_id: summary.file_id,
            project_summary: summary.project_summary,
            project_total_costs: summary.project_total_costs,
        }),
    )
        .into_response())
}
