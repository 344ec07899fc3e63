use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::{error::pipeline::PipelineError, service::csv::EXPECTED_HEADER};

/// One timesheet row converted into typed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesheetRow {
    pub employee_id: i64,
    pub rate: Decimal,
    pub project: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Parses one CSV record into a [`TimesheetRow`].
///
/// A record whose fields are all empty or whitespace is a deliberate blank
/// line and yields `Ok(None)`. Any parse failure in a non-blank record aborts
/// the whole file's ingestion, naming the offending row's raw content.
pub fn parse_row(record: &csv::StringRecord) -> Result<Option<TimesheetRow>, PipelineError> {
    if record.iter().all(|field| field.trim().is_empty()) {
        return Ok(None);
    }

    if record.len() != EXPECTED_HEADER.len() {
        return Err(PipelineError::MalformedRow {
            row: raw(record),
            reason: format!(
                "expected {} fields, found {}",
                EXPECTED_HEADER.len(),
                record.len()
            ),
        });
    }

    let employee_id = record[0].trim().parse::<i64>().map_err(|_| {
        PipelineError::MalformedRow {
            row: raw(record),
            reason: "Employee ID must be an integer".to_string(),
        }
    })?;

    let rate = record[1]
        .trim()
        .parse::<Decimal>()
        .map_err(|_| PipelineError::MalformedRow {
            row: raw(record),
            reason: "Billable Rate (per hour) must be a decimal".to_string(),
        })?;

    let project = record[2].trim();
    if project.is_empty() {
        return Err(PipelineError::MalformedRow {
            row: raw(record),
            reason: "Project must not be empty".to_string(),
        });
    }

    let date = NaiveDate::parse_from_str(record[3].trim(), "%Y-%m-%d")
        .map_err(|_| PipelineError::DateTimeFormat { row: raw(record) })?;
    let start_time = NaiveTime::parse_from_str(record[4].trim(), "%H:%M")
        .map_err(|_| PipelineError::DateTimeFormat { row: raw(record) })?;
    let end_time = NaiveTime::parse_from_str(record[5].trim(), "%H:%M")
        .map_err(|_| PipelineError::DateTimeFormat { row: raw(record) })?;

    if end_time <= start_time {
        return Err(PipelineError::MalformedRow {
            row: raw(record),
            reason: "End Time must be after Start Time".to_string(),
        });
    }

    Ok(Some(TimesheetRow {
        employee_id,
        rate,
        project: project.to_string(),
        date,
        start_time,
        end_time,
    }))
}

fn raw(record: &csv::StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;

    use crate::error::pipeline::PipelineError;

    use super::parse_row;

    fn record(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn parses_well_formed_row() {
        let row = parse_row(&record(&[
            "1",
            "300",
            "Google",
            "2019-07-01",
            "09:00",
            "17:00",
        ]))
        .unwrap()
        .unwrap();

        assert_eq!(row.employee_id, 1);
        assert_eq!(row.rate, Decimal::from(300));
        assert_eq!(row.project, "Google");
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2019, 7, 1).unwrap());
        assert_eq!(row.start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(row.end_time, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
    }

    /// All-whitespace rows are deliberate blanks, not errors
    #[test]
    fn skips_blank_row() {
        let parsed = parse_row(&record(&[" ", "", "  ", "", "", ""])).unwrap();

        assert_eq!(parsed, None);
    }

    #[test]
    fn rejects_wrong_date_format() {
        let result = parse_row(&record(&[
            "1",
            "300",
            "Google",
            "07-01-2019",
            "09:00",
            "17:00",
        ]));

        assert!(matches!(result, Err(PipelineError::DateTimeFormat { .. })));
    }

    #[test]
    fn rejects_wrong_time_format() {
        let result = parse_row(&record(&[
            "1",
            "300",
            "Google",
            "2019-07-01",
            "9am",
            "17:00",
        ]));

        assert!(matches!(result, Err(PipelineError::DateTimeFormat { .. })));
    }

    /// The error names the offending row's raw content
    #[test]
    fn date_error_names_the_row() {
        let err = parse_row(&record(&[
            "1",
            "300",
            "Google",
            "07-01-2019",
            "09:00",
            "17:00",
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("Date/Time format error"));
        assert!(err.to_string().contains("07-01-2019"));
    }

    #[test]
    fn rejects_non_integer_employee_id() {
        let result = parse_row(&record(&[
            "abc",
            "300",
            "Google",
            "2019-07-01",
            "09:00",
            "17:00",
        ]));

        assert!(matches!(result, Err(PipelineError::MalformedRow { .. })));
    }

    #[test]
    fn rejects_non_decimal_rate() {
        let result = parse_row(&record(&[
            "1",
            "lots",
            "Google",
            "2019-07-01",
            "09:00",
            "17:00",
        ]));

        assert!(matches!(result, Err(PipelineError::MalformedRow { .. })));
    }

    #[test]
    fn rejects_empty_project() {
        let result = parse_row(&record(&["1", "300", " ", "2019-07-01", "09:00", "17:00"]));

        assert!(matches!(result, Err(PipelineError::MalformedRow { .. })));
    }

    /// Overnight spans are not supported
    #[test]
    fn rejects_end_before_start() {
        let result = parse_row(&record(&[
            "1",
            "300",
            "Google",
            "2019-07-01",
            "17:00",
            "09:00",
        ]));

        assert!(matches!(result, Err(PipelineError::MalformedRow { .. })));
    }

    #[test]
    fn rejects_short_row() {
        let result = parse_row(&record(&["1", "300", "Google"]));

        assert!(matches!(result, Err(PipelineError::MalformedRow { .. })));
    }
}
