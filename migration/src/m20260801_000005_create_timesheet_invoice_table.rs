use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_create_employee_table::Employee;
use crate::m20260801_000002_create_project_table::Project;
use crate::m20260801_000003_create_timesheet_file_table::TimesheetFile;
use crate::m20260801_000004_create_billable_rate_table::BillableRate;

static FK_TIMESHEET_INVOICE_FILE_ID: &str = "fk_timesheet_invoice_file_id";
static FK_TIMESHEET_INVOICE_EMPLOYEE_ID: &str = "fk_timesheet_invoice_employee_id";
static FK_TIMESHEET_INVOICE_PROJECT_ID: &str = "fk_timesheet_invoice_project_id";
static FK_TIMESHEET_INVOICE_BILLABLE_RATE_ID: &str = "fk_timesheet_invoice_billable_rate_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimesheetInvoice::Table)
                    .if_not_exists()
                    .col(pk_auto(TimesheetInvoice::Id))
                    .col(uuid(TimesheetInvoice::FileId))
                    .col(integer(TimesheetInvoice::EmployeeId))
                    .col(integer(TimesheetInvoice::ProjectId))
                    .col(integer(TimesheetInvoice::BillableRateId))
                    .col(date(TimesheetInvoice::Date))
                    .col(time(TimesheetInvoice::StartTime))
                    .col(time(TimesheetInvoice::EndTime))
                    .to_owned(),
            )
            .await?;

        let foreign_keys = [
            (
                FK_TIMESHEET_INVOICE_FILE_ID,
                TimesheetInvoice::FileId,
                TimesheetFile::Table.into_iden(),
                TimesheetFile::Id.into_iden(),
            ),
            (
                FK_TIMESHEET_INVOICE_EMPLOYEE_ID,
                TimesheetInvoice::EmployeeId,
                Employee::Table.into_iden(),
                Employee::Id.into_iden(),
            ),
            (
                FK_TIMESHEET_INVOICE_PROJECT_ID,
                TimesheetInvoice::ProjectId,
                Project::Table.into_iden(),
                Project::Id.into_iden(),
            ),
            (
                FK_TIMESHEET_INVOICE_BILLABLE_RATE_ID,
                TimesheetInvoice::BillableRateId,
                BillableRate::Table.into_iden(),
                BillableRate::Id.into_iden(),
            ),
        ];

        for (name, from_col, to_tbl, to_col) in foreign_keys {
            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name(name)
                        .from_tbl(TimesheetInvoice::Table)
                        .from_col(from_col)
                        .to_tbl(to_tbl)
                        .to_col(to_col)
                        .on_delete(ForeignKeyAction::Cascade)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            FK_TIMESHEET_INVOICE_FILE_ID,
            FK_TIMESHEET_INVOICE_EMPLOYEE_ID,
            FK_TIMESHEET_INVOICE_PROJECT_ID,
            FK_TIMESHEET_INVOICE_BILLABLE_RATE_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(name)
                        .table(TimesheetInvoice::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(TimesheetInvoice::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TimesheetInvoice {
    Table,
    Id,
    FileId,
    EmployeeId,
    ProjectId,
    BillableRateId,
    Date,
    StartTime,
    EndTime,
}
