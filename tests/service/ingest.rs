//! Tests for IngestService::ingest_file.
//!
//! Verifies the PENDING to LOADED transition, the all-or-nothing transaction
//! around row loading, and the FAILED transitions with their stored messages.

use billhours::data::timesheet_invoice::TimesheetInvoiceRepository;
use billhours::service::ingest::{IngestOutcome, IngestService};
use billhours_test_utils::{fixtures, test_setup_with_billing_tables, TestError};
use entity::timesheet_file::FileStatus;
use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

/// Tests ingesting a well-formed file.
///
/// Expected: Ok(Loaded) with one billing record per data row and the file
/// advanced to LOADED.
#[tokio::test]
async fn loads_valid_file() -> Result<(), TestError> {
    let setup = test_setup_with_billing_tables!()?;
    let db = &setup.state.db;

    let file = fixtures::insert_pending_file(db, fixtures::VALID_CSV).await?;

    let outcome = IngestService::new(db).ingest_file(file.id).await.unwrap();
    assert_eq!(outcome, IngestOutcome::Loaded { records: 2 });
    assert_eq!(
        outcome.message(file.id),
        format!("Read file {} successfully.", file.id)
    );

    let stored = entity::prelude::TimesheetFile::find_by_id(file.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, FileStatus::Loaded);
    assert_eq!(stored.error_message, None);

    let records = TimesheetInvoiceRepository::new(db).count_by_file(file.id).await?;
    assert_eq!(records, 2);
    let rates = entity::prelude::BillableRate::find().count(db).await?;
    assert_eq!(rates, 2);
    let employees = entity::prelude::Employee::find().count(db).await?;
    assert_eq!(employees, 2);
    let projects = entity::prelude::Project::find().count(db).await?;
    assert_eq!(projects, 2);

    Ok(())
}

/// Tests re-ingesting a file that already went all the way to PROCESSED.
///
/// Expected: Ok(AlreadyProcessed) with no records created and the status
/// left alone.
#[tokio::test]
async fn processed_file_is_untouched() -> Result<(), TestError> {
    let setup = test_setup_with_billing_tables!()?;
    let db = &setup.state.db;

    let file = fixtures::insert_file(db, fixtures::VALID_CSV, FileStatus::Processed).await?;

    let outcome = IngestService::new(db).ingest_file(file.id).await.unwrap();
    assert_eq!(outcome, IngestOutcome::AlreadyProcessed);
    assert_eq!(
        outcome.message(file.id),
        format!("File {} has already been processed.", file.id)
    );

    let records = TimesheetInvoiceRepository::new(db).count_by_file(file.id).await?;
    assert_eq!(records, 0);

    let stored = entity::prelude::TimesheetFile::find_by_id(file.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, FileStatus::Processed);

    Ok(())
}

/// Tests ingesting a file already sitting at LOADED.
///
/// Expected: Ok(AlreadyProcessed), no duplicate records.
#[tokio::test]
async fn loaded_file_is_untouched() -> Result<(), TestError> {
    let setup = test_setup_with_billing_tables!()?;
    let db = &setup.state.db;

    let file = fixtures::insert_file(db, fixtures::VALID_CSV, FileStatus::Loaded).await?;

    let outcome = IngestService::new(db).ingest_file(file.id).await.unwrap();
    assert_eq!(outcome, IngestOutcome::AlreadyProcessed);

    let records = TimesheetInvoiceRepository::new(db).count_by_file(file.id).await?;
    assert_eq!(records, 0);

    Ok(())
}

/// Tests that a rate conflict rolls back everything loaded so far.
///
/// Expected: Err with the conflict message, file FAILED carrying the same
/// message, and zero billing or rate records persisted.
#[tokio::test]
async fn conflicting_rate_rolls_back() -> Result<(), TestError> {
    let setup = test_setup_with_billing_tables!()?;
    let db = &setup.state.db;

    let file = fixtures::insert_pending_file(db, fixtures::CONFLICTING_RATE_CSV).await?;

    let err = IngestService::new(db).ingest_file(file.id).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Billable rate for employee 1 in same file can't have two different values"
    );

    let stored = entity::prelude::TimesheetFile::find_by_id(file.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, FileStatus::Failed);
    assert_eq!(stored.error_message, Some(err.to_string()));

    let records = TimesheetInvoiceRepository::new(db).count_by_file(file.id).await?;
    assert_eq!(records, 0);
    let rates = entity::prelude::BillableRate::find().count(db).await?;
    assert_eq!(rates, 0);

    Ok(())
}

/// Tests that a wrongly formatted date fails the whole file.
///
/// Expected: Err naming the offending row, file FAILED with the date error.
#[tokio::test]
async fn bad_date_marks_file_failed() -> Result<(), TestError> {
    let setup = test_setup_with_billing_tables!()?;
    let db = &setup.state.db;

    let file = fixtures::insert_pending_file(db, fixtures::BAD_DATE_CSV).await?;

    let err = IngestService::new(db).ingest_file(file.id).await.unwrap_err();
    assert!(err.to_string().contains("Date/Time format error"));

    let stored = entity::prelude::TimesheetFile::find_by_id(file.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, FileStatus::Failed);
    assert!(stored
        .error_message
        .unwrap()
        .contains("Date/Time format error"));

    Ok(())
}

/// Tests that deliberate blank lines between rows are skipped.
///
/// Expected: Ok(Loaded) counting only the non-blank rows.
#[tokio::test]
async fn blank_rows_are_skipped() -> Result<(), TestError> {
    let setup = test_setup_with_billing_tables!()?;
    let db = &setup.state.db;

    let file = fixtures::insert_pending_file(db, fixtures::BLANK_ROWS_CSV).await?;

    let outcome = IngestService::new(db).ingest_file(file.id).await.unwrap();
    assert_eq!(outcome, IngestOutcome::Loaded { records: 2 });

    let records = TimesheetInvoiceRepository::new(db).count_by_file(file.id).await?;
    assert_eq!(records, 2);

    Ok(())
}

/// Tests ingesting a file whose stored content is only the header.
///
/// Expected: Err and the file FAILED with the header-only message.
#[tokio::test]
async fn header_only_file_fails() -> Result<(), TestError> {
    let setup = test_setup_with_billing_tables!()?;
    let db = &setup.state.db;

    let file = fixtures::insert_pending_file(db, fixtures::CSV_HEADER).await?;

    let err = IngestService::new(db).ingest_file(file.id).await.unwrap_err();
    assert_eq!(err.to_string(), "CSV file contains only the header.");

    let stored = entity::prelude::TimesheetFile::find_by_id(file.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, FileStatus::Failed);
    assert_eq!(
        stored.error_message,
        Some("CSV file contains only the header.".to_string())
    );

    Ok(())
}

/// Tests ingesting an id no file was ever stored under.
///
/// Expected: Err naming the missing file; nothing to mark FAILED.
#[tokio::test]
async fn missing_file_errors() -> Result<(), TestError> {
    let setup = test_setup_with_billing_tables!()?;
    let db = &setup.state.db;

    let file_id = Uuid::new_v4();
    let err = IngestService::new(db).ingest_file(file_id).await.unwrap_err();

    assert_eq!(err.to_string(), format!("File {file_id} was not found."));

    Ok(())
}
