use chrono::Utc;
use entity::timesheet_file::{self, FileStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use uuid::Uuid;

use crate::error::TestError;

/// The only header the upload validator accepts, in exact column order.
pub static CSV_HEADER: &str =
    "Employee ID,Billable Rate (per hour),Project,Date,Start Time,End Time";

/// Two well-formed rows for two employees on two projects.
pub static VALID_CSV: &str = "Employee ID,Billable Rate (per hour),Project,Date,Start Time,End Time\n\
    1,300,Google,2019-07-01,09:00,17:00\n\
    2,100,Facebook,2019-07-01,11:00,16:00";

/// Four rows across two projects, matching the known-good summary values.
pub static SUMMARY_CSV: &str = "Employee ID,Billable Rate (per hour),Project,Date,Start Time,End Time\n\
    1,300,Google,2019-07-01,09:00,17:00\n\
    2,150,Google,2019-07-01,10:00,15:00\n\
    3,200,Apple,2019-07-01,11:45,16:00\n\
    4,350,Apple,2019-07-02,09:30,17:00";

/// Employee 1 appears twice with two different billable rates.
pub static CONFLICTING_RATE_CSV: &str = "Employee ID,Billable Rate (per hour),Project,Date,Start Time,End Time\n\
    1,300,Google,2019-07-01,09:00,17:00\n\
    1,350,Google,2019-07-02,09:00,17:00";

/// The date column uses `MM-DD-YYYY` instead of `YYYY-MM-DD`.
pub static BAD_DATE_CSV: &str = "Employee ID,Billable Rate (per hour),Project,Date,Start Time,End Time\n\
    1,300,Google,07-01-2019,09:00,17:00";

/// Valid rows interleaved with deliberate blank lines.
pub static BLANK_ROWS_CSV: &str = "Employee ID,Billable Rate (per hour),Project,Date,Start Time,End Time\n\
    \n\
    101,50,Website Development,2024-09-01,09:00,17:00\n\
    \n\
    102,60,Mobile App,2024-09-01,10:00,15:00";

/// Inserts a timesheet file row holding `csv` with the given status.
pub async fn insert_file(
    db: &DatabaseConnection,
    csv: &str,
    status: FileStatus,
) -> Result<timesheet_file::Model, TestError> {
    let file = timesheet_file::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        filename: ActiveValue::Set("test.csv".to_string()),
        content: ActiveValue::Set(csv.as_bytes().to_vec()),
        status: ActiveValue::Set(status),
        error_message: ActiveValue::Set(None),
        uploaded_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    Ok(file.insert(db).await?)
}

/// Inserts a timesheet file row still waiting for ingestion.
pub async fn insert_pending_file(
    db: &DatabaseConnection,
    csv: &str,
) -> Result<timesheet_file::Model, TestError> {
    insert_file(db, csv, FileStatus::Pending).await
}
