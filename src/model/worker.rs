//! Worker job definitions for background processing.
//!
//! Jobs are serialized to JSON for Redis storage and deserialized by the
//! worker handler. Delivery is at-least-once; both job types tolerate
//! duplicate deliveries through the file status guards in their services.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Background job types for the timesheet pipeline.
///
/// `IngestFile` is pushed when an upload is admitted; `ComputeSummary` is
/// pushed by the worker once ingestion reaches LOADED.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum WorkerJob {
    /// Ingest an uploaded file's rows into billing records.
    IngestFile { file_id: Uuid },
    /// Compute the invoice summary for a loaded file.
    ComputeSummary { file_id: Uuid },
}

impl fmt::Display for WorkerJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IngestFile { file_id } => write!(f, "IngestFile({file_id})"),
            Self::ComputeSummary { file_id } => write!(f, "ComputeSummary({file_id})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WorkerJob;
    use uuid::Uuid;

    /// Jobs must round-trip through JSON unchanged for Redis storage.
    #[test]
    fn serializes_and_deserializes() {
        let job = WorkerJob::IngestFile {
            file_id: Uuid::new_v4(),
        };

        let json = serde_json::to_string(&job).unwrap();
        let parsed: WorkerJob = serde_json::from_str(&json).unwrap();

        assert_eq!(job, parsed);
    }
}
