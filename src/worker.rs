use apalis::prelude::{Data, Storage};
use apalis_redis::RedisStorage;
use sea_orm::DatabaseConnection;

use crate::{
    error::{worker::WorkerError, Error},
    model::worker::WorkerJob,
    service::{
        ingest::{IngestOutcome, IngestService},
        summary::{SummaryOutcome, SummaryService},
    },
};

/// Dispatches queued jobs to the pipeline services.
///
/// Delivery is at-least-once; the services' status guards make duplicate
/// deliveries harmless. A successful ingestion chains the summary job.
pub async fn handle_job(
    job: WorkerJob,
    db: Data<DatabaseConnection>,
    jobs: Data<RedisStorage<WorkerJob>>,
) -> Result<(), Error> {
    match job {
        WorkerJob::IngestFile { file_id } => {
            tracing::debug!("Processing ingestion for file_id: {}", file_id);

            let outcome = IngestService::new(&db)
                .ingest_file(file_id)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to ingest file {}: {:?}", file_id, e);
                    e
                })?;

            tracing::info!("{}", outcome.message(file_id));

            if let IngestOutcome::Loaded { .. } = outcome {
                let mut jobs = (*jobs).clone();
                jobs.push(WorkerJob::ComputeSummary { file_id })
                    .await
                    .map_err(|e| WorkerError::Enqueue(e.to_string()))?;
            }
        }
        WorkerJob::ComputeSummary { file_id } => {
            tracing::debug!("Processing summary for file_id: {}", file_id);

            let outcome = SummaryService::new(&db)
                .compute_summary(file_id)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to compute summary for file {}: {:?}", file_id, e);
                    e
                })?;

            match outcome {
                SummaryOutcome::Processed => {
                    tracing::info!("Computed summary for file {}", file_id)
                }
                SummaryOutcome::AlreadyProcessed => {
                    tracing::info!("File {} has already been processed.", file_id)
                }
            }
        }
    }

    Ok(())
}
