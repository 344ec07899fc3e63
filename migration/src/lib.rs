pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_employee_table;
mod m20260801_000002_create_project_table;
mod m20260801_000003_create_timesheet_file_table;
mod m20260801_000004_create_billable_rate_table;
mod m20260801_000005_create_timesheet_invoice_table;
mod m20260801_000006_create_invoice_summary_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_employee_table::Migration),
            Box::new(m20260801_000002_create_project_table::Migration),
            Box::new(m20260801_000003_create_timesheet_file_table::Migration),
            Box::new(m20260801_000004_create_billable_rate_table::Migration),
            Box::new(m20260801_000005_create_timesheet_invoice_table::Migration),
            Box::new(m20260801_000006_create_invoice_summary_table::Migration),
        ]
    }
}
