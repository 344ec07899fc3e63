use std::collections::{BTreeMap, HashMap};

use entity::timesheet_file::FileStatus;
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use uuid::Uuid;

use crate::{
    data::{
        billable_rate::BillableRateRepository, employee::EmployeeRepository,
        invoice_summary::InvoiceSummaryRepository, project::ProjectRepository,
        timesheet_file::TimesheetFileRepository,
        timesheet_invoice::TimesheetInvoiceRepository,
    },
    error::{pipeline::PipelineError, Error},
    service::decimal::{stringify, DecimalValue},
};

/// What a summary run did with the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// The summary was computed and the file is now PROCESSED.
    Processed,
    /// The file was already PROCESSED; nothing was touched.
    AlreadyProcessed,
}

/// Aggregates a LOADED file's billing records into its invoice summary.
pub struct SummaryService<'a> {
    db: &'a DatabaseConnection,
}

struct EmployeeAcc {
    employee_id: i64,
    total_hours: Decimal,
    unit_price: Decimal,
    cost: Decimal,
}

struct ProjectAcc {
    project_id: i32,
    name: String,
    employees: Vec<EmployeeAcc>,
}

impl<'a> SummaryService<'a> {
    /// Creates a new instance of [`SummaryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes per-project, per-employee hours and costs for a LOADED file.
    ///
    /// Persists exactly one summary row and flips the file to PROCESSED in
    /// one transaction. A PROCESSED file is a no-op; any other status marks
    /// the file FAILED and errors, making out-of-order invocation observable.
    pub async fn compute_summary(&self, file_id: Uuid) -> Result<SummaryOutcome, Error> {
        let files = TimesheetFileRepository::new(self.db);
        let file = files
            .get(file_id)
            .await?
            .ok_or(PipelineError::FileNotFound(file_id))?;

        match file.status {
            FileStatus::Processed => return Ok(SummaryOutcome::AlreadyProcessed),
            FileStatus::Loaded => (),
            _ => {
                let err = PipelineError::NotYetLoaded(file_id);
                files.mark_failed(file_id, &err.to_string()).await?;

                return Err(err.into());
            }
        }

        let txn = self.db.begin().await?;

        match aggregate(&txn, file_id).await {
            Ok(()) => {
                TimesheetFileRepository::new(&txn)
                    .set_status(file_id, FileStatus::Processed)
                    .await?;
                txn.commit().await?;

                tracing::info!(%file_id, "invoice summary computed");

                Ok(SummaryOutcome::Processed)
            }
            Err(err) => {
                txn.rollback().await?;
                files.mark_failed(file_id, &err.to_string()).await?;

                tracing::warn!(%file_id, error = %err, "summary computation failed");

                Err(err)
            }
        }
    }
}

async fn aggregate<C: ConnectionTrait>(txn: &C, file_id: Uuid) -> Result<(), Error> {
    let records = TimesheetInvoiceRepository::new(txn).get_by_file(file_id).await?;

    let project_names: HashMap<i32, String> = ProjectRepository::new(txn)
        .get_by_ids(records.iter().map(|r| r.project_id).collect())
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();
    let external_ids: HashMap<i32, i64> = EmployeeRepository::new(txn)
        .get_by_ids(records.iter().map(|r| r.employee_id).collect())
        .await?
        .into_iter()
        .map(|e| (e.id, e.employee_id))
        .collect();
    let rate_by_id: HashMap<i32, Decimal> = BillableRateRepository::new(txn)
        .get_by_file(file_id)
        .await?
        .into_iter()
        .map(|r| (r.id, r.rate))
        .collect();

    // First-seen order of projects, and of employees within each project,
    // is preserved through the Vec accumulators.
    let mut projects: Vec<ProjectAcc> = Vec::new();

    for record in &records {
        let name = project_names
            .get(&record.project_id)
            .ok_or_else(|| missing("project", record.project_id))?;
        let employee_id = *external_ids
            .get(&record.employee_id)
            .ok_or_else(|| missing("employee", record.employee_id))?;
        let unit_price = *rate_by_id
            .get(&record.billable_rate_id)
            .ok_or_else(|| missing("billable rate", record.billable_rate_id))?;

        let hours = record.hours_worked();

        let idx = match projects
            .iter()
            .position(|p| p.project_id == record.project_id)
        {
            Some(idx) => idx,
            None => {
                projects.push(ProjectAcc {
                    project_id: record.project_id,
                    name: name.clone(),
                    employees: Vec::new(),
                });
                projects.len() - 1
            }
        };
        let project = &mut projects[idx];

        match project
            .employees
            .iter_mut()
            .find(|e| e.employee_id == employee_id)
        {
            Some(acc) => {
                acc.total_hours += hours;
                acc.cost += hours * unit_price;
                // one rate per employee per file is already enforced, so
                // last-wins is a formality
                acc.unit_price = unit_price;
            }
            None => project.employees.push(EmployeeAcc {
                employee_id,
                total_hours: hours,
                unit_price,
                cost: hours * unit_price,
            }),
        }
    }

    let mut project_summary = BTreeMap::new();
    let mut project_total_costs = BTreeMap::new();

    for project in projects {
        let total: Decimal = project.employees.iter().map(|e| e.cost).sum();

        let entries = project
            .employees
            .into_iter()
            .map(|acc| {
                let mut entry = BTreeMap::new();
                entry.insert(
                    "employee_id".to_string(),
                    DecimalValue::Other(serde_json::json!(acc.employee_id)),
                );
                entry.insert("total_hours".to_string(), DecimalValue::from(acc.total_hours));
                entry.insert("unit_price".to_string(), DecimalValue::from(acc.unit_price));
                entry.insert("cost".to_string(), DecimalValue::from(acc.cost));
                DecimalValue::Map(entry)
            })
            .collect();

        project_summary.insert(project.name.clone(), DecimalValue::List(entries));
        project_total_costs.insert(project.name, DecimalValue::from(total));
    }

    InvoiceSummaryRepository::new(txn)
        .create(
            file_id,
            stringify(DecimalValue::Map(project_summary)),
            stringify(DecimalValue::Map(project_total_costs)),
        )
        .await?;

    Ok(())
}

fn missing(kind: &str, id: i32) -> Error {
    Error::DbErr(DbErr::RecordNotFound(format!(
        "{kind} {id} referenced by billing record is missing"
    )))
}
