use entity::timesheet_file::FileStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The response when an error occurs with an API request.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response after a successful upload.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UploadedDto {
    /// Human-readable confirmation message
    pub message: String,
    /// Identifier to poll status and fetch the summary with
    pub file_id: Uuid,
}

/// The processing status of an uploaded file.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct FileStatusDto {
    /// One of PENDING, LOADED, PROCESSED, FAILED
    #[schema(value_type = String)]
    pub status: FileStatus,
    /// Populated only when the file has FAILED
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// The invoice summary computed for a processed file.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SummaryDto {
    pub file_id: Uuid,
    /// Project name -> ordered list of per-employee entries
    #[schema(value_type = Object)]
    pub project_summary: serde_json::Value,
    /// Project name -> total cost as a fixed two-decimal string
    #[schema(value_type = Object)]
    pub project_total_costs: serde_json::Value,
}
