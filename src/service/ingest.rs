use entity::timesheet_file::FileStatus;
use sea_orm::{ActiveValue, ConnectionTrait, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    data::{
        project::ProjectRepository, timesheet_file::TimesheetFileRepository,
        timesheet_invoice::TimesheetInvoiceRepository,
    },
    error::{pipeline::PipelineError, upload::UploadError, Error},
    service::{
        csv::{
            row::parse_row,
            validator::{validate, RawUpload},
        },
        rate::RateRegistry,
    },
};

/// Billing records are flushed to the database in batches of this size.
const INSERT_BATCH_SIZE: usize = 100;

/// What an ingestion run did with the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The file was PENDING and its rows are now persisted billing records.
    Loaded { records: usize },
    /// The file already moved past PENDING; nothing was touched.
    AlreadyProcessed,
}

impl IngestOutcome {
    /// Human-readable result line for logs and task reports
    pub fn message(&self, file_id: Uuid) -> String {
        match self {
            Self::Loaded { .. } => format!("Read file {file_id} successfully."),
            Self::AlreadyProcessed => format!("File {file_id} has already been processed."),
        }
    }
}

/// Drives a timesheet file from PENDING to LOADED.
pub struct IngestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngestService<'a> {
    /// Creates a new instance of [`IngestService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates the stored upload and persists its rows as billing records.
    ///
    /// The whole run is one transaction: every record for the file exists
    /// after commit or none do. On any row error the transaction rolls back,
    /// the file is marked FAILED with the error's display text, and the error
    /// propagates. A file past PENDING is left untouched.
    pub async fn ingest_file(&self, file_id: Uuid) -> Result<IngestOutcome, Error> {
        let files = TimesheetFileRepository::new(self.db);
        let file = files
            .get(file_id)
            .await?
            .ok_or(PipelineError::FileNotFound(file_id))?;

        if file.status != FileStatus::Pending {
            return Ok(IngestOutcome::AlreadyProcessed);
        }

        let txn = self.db.begin().await?;

        match load_rows(&txn, &file).await {
            Ok(records) => {
                TimesheetFileRepository::new(&txn)
                    .set_status(file.id, FileStatus::Loaded)
                    .await?;
                txn.commit().await?;

                tracing::info!(%file_id, records, "timesheet file loaded");

                Ok(IngestOutcome::Loaded { records })
            }
            Err(err) => {
                txn.rollback().await?;
                files.mark_failed(file.id, &err.to_string()).await?;

                tracing::warn!(%file_id, error = %err, "timesheet file failed to load");

                Err(err)
            }
        }
    }
}

async fn load_rows<C: ConnectionTrait>(
    txn: &C,
    file: &entity::timesheet_file::Model,
) -> Result<usize, Error> {
    let upload = RawUpload {
        filename: file.filename.clone(),
        content_type: Some("text/csv".to_string()),
        bytes: file.content.clone(),
    };
    let document = validate(Some(&upload))?;

    let projects = ProjectRepository::new(txn);
    let invoices = TimesheetInvoiceRepository::new(txn);
    let mut rates = RateRegistry::new(file.id);

    let mut batch = Vec::new();
    let mut records = 0usize;

    for result in document.rows() {
        let record = result.map_err(|e| UploadError::ReadError(e.to_string()))?;
        let Some(row) = parse_row(&record)? else {
            continue;
        };

        let resolved = rates.resolve(txn, row.employee_id, row.rate).await?;
        let project = projects.get_or_create(&row.project).await?;

        batch.push(entity::timesheet_invoice::ActiveModel {
            file_id: ActiveValue::Set(file.id),
            employee_id: ActiveValue::Set(resolved.employee_id),
            project_id: ActiveValue::Set(project.id),
            billable_rate_id: ActiveValue::Set(resolved.rate_id),
            date: ActiveValue::Set(row.date),
            start_time: ActiveValue::Set(row.start_time),
            end_time: ActiveValue::Set(row.end_time),
            ..Default::default()
        });
        records += 1;

        if batch.len() >= INSERT_BATCH_SIZE {
            invoices.insert_many(std::mem::take(&mut batch)).await?;
        }
    }

    invoices.insert_many(batch).await?;

    Ok(records)
}
