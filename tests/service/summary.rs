//! Tests for SummaryService::compute_summary.
//!
//! Verifies the LOADED to PROCESSED transition, the exact shape and rounding
//! of the persisted summary documents, and the guards around out-of-order
//! invocation.

use billhours::service::{
    ingest::{IngestOutcome, IngestService},
    summary::{SummaryOutcome, SummaryService},
};
use billhours_test_utils::{fixtures, test_setup_with_billing_tables, TestError};
use entity::timesheet_file::FileStatus;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;

/// Tests the full pipeline over a known four-row file.
///
/// Expected: Ok(Processed), file PROCESSED, and a summary row whose
/// documents match the hand-computed hours and costs exactly.
#[tokio::test]
async fn computes_expected_summary() -> Result<(), TestError> {
    let setup = test_setup_with_billing_tables!()?;
    let db = &setup.state.db;

    let file = fixtures::insert_pending_file(db, fixtures::SUMMARY_CSV).await?;

    let loaded = IngestService::new(db).ingest_file(file.id).await.unwrap();
    assert_eq!(loaded, IngestOutcome::Loaded { records: 4 });

    let outcome = SummaryService::new(db).compute_summary(file.id).await.unwrap();
    assert_eq!(outcome, SummaryOutcome::Processed);

    let stored = entity::prelude::TimesheetFile::find_by_id(file.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, FileStatus::Processed);
    assert_eq!(stored.error_message, None);

    let summary = entity::prelude::InvoiceSummary::find()
        .filter(entity::invoice_summary::Column::FileId.eq(file.id))
        .one(db)
        .await?
        .unwrap();

    assert_eq!(
        summary.project_summary,
        json!({
            "Google": [
                {"employee_id": 1, "total_hours": "8.00", "unit_price": "300.00", "cost": "2400.00"},
                {"employee_id": 2, "total_hours": "5.00", "unit_price": "150.00", "cost": "750.00"},
            ],
            "Apple": [
                {"employee_id": 3, "total_hours": "4.25", "unit_price": "200.00", "cost": "850.00"},
                {"employee_id": 4, "total_hours": "7.50", "unit_price": "350.00", "cost": "2625.00"},
            ],
        })
    );
    assert_eq!(
        summary.project_total_costs,
        json!({
            "Google": "3150.00",
            "Apple": "3475.00",
        })
    );

    Ok(())
}

/// Tests that repeated rows for one employee accumulate into one entry.
///
/// Expected: a single list entry summing hours and costs across both rows.
#[tokio::test]
async fn accumulates_repeated_employee_rows() -> Result<(), TestError> {
    let setup = test_setup_with_billing_tables!()?;
    let db = &setup.state.db;

    let csv = "Employee ID,Billable Rate (per hour),Project,Date,Start Time,End Time\n\
        1,300,Google,2019-07-01,09:00,17:00\n\
        1,300,Google,2019-07-02,09:00,13:00";
    let file = fixtures::insert_pending_file(db, csv).await?;

    IngestService::new(db).ingest_file(file.id).await.unwrap();
    SummaryService::new(db).compute_summary(file.id).await.unwrap();

    let summary = entity::prelude::InvoiceSummary::find()
        .filter(entity::invoice_summary::Column::FileId.eq(file.id))
        .one(db)
        .await?
        .unwrap();

    assert_eq!(
        summary.project_summary,
        json!({
            "Google": [
                {"employee_id": 1, "total_hours": "12.00", "unit_price": "300.00", "cost": "3600.00"},
            ],
        })
    );
    assert_eq!(summary.project_total_costs, json!({"Google": "3600.00"}));

    Ok(())
}

/// Tests requesting a summary for a file that was never ingested.
///
/// Expected: Err with the not-loaded message, file FAILED carrying it, and
/// no summary row created.
#[tokio::test]
async fn pending_file_fails_precondition() -> Result<(), TestError> {
    let setup = test_setup_with_billing_tables!()?;
    let db = &setup.state.db;

    let file = fixtures::insert_pending_file(db, fixtures::VALID_CSV).await?;

    let err = SummaryService::new(db).compute_summary(file.id).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("File {} has not been loaded yet.", file.id)
    );

    let stored = entity::prelude::TimesheetFile::find_by_id(file.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, FileStatus::Failed);
    assert_eq!(stored.error_message, Some(err.to_string()));

    let summaries = entity::prelude::InvoiceSummary::find().count(db).await?;
    assert_eq!(summaries, 0);

    Ok(())
}

/// Tests re-running the summary on an already PROCESSED file.
///
/// Expected: Ok(AlreadyProcessed) with the existing summary left as the
/// only one.
#[tokio::test]
async fn processed_file_is_idempotent() -> Result<(), TestError> {
    let setup = test_setup_with_billing_tables!()?;
    let db = &setup.state.db;

    let file = fixtures::insert_pending_file(db, fixtures::SUMMARY_CSV).await?;
    IngestService::new(db).ingest_file(file.id).await.unwrap();
    SummaryService::new(db).compute_summary(file.id).await.unwrap();

    let outcome = SummaryService::new(db).compute_summary(file.id).await.unwrap();
    assert_eq!(outcome, SummaryOutcome::AlreadyProcessed);

    let summaries = entity::prelude::InvoiceSummary::find().count(db).await?;
    assert_eq!(summaries, 1);

    let stored = entity::prelude::TimesheetFile::find_by_id(file.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, FileStatus::Processed);

    Ok(())
}
