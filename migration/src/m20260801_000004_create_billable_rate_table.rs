use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_create_employee_table::Employee;
use crate::m20260801_000003_create_timesheet_file_table::TimesheetFile;

static FK_BILLABLE_RATE_FILE_ID: &str = "fk_billable_rate_file_id";
static FK_BILLABLE_RATE_EMPLOYEE_ID: &str = "fk_billable_rate_employee_id";
static IDX_BILLABLE_RATE_FILE_EMPLOYEE: &str = "idx_billable_rate_file_employee";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillableRate::Table)
                    .if_not_exists()
                    .col(pk_auto(BillableRate::Id))
                    .col(uuid(BillableRate::FileId))
                    .col(integer(BillableRate::EmployeeId))
                    .col(decimal_len(BillableRate::Rate, 10, 2))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BILLABLE_RATE_FILE_ID)
                    .from_tbl(BillableRate::Table)
                    .from_col(BillableRate::FileId)
                    .to_tbl(TimesheetFile::Table)
                    .to_col(TimesheetFile::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BILLABLE_RATE_EMPLOYEE_ID)
                    .from_tbl(BillableRate::Table)
                    .from_col(BillableRate::EmployeeId)
                    .to_tbl(Employee::Table)
                    .to_col(Employee::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BILLABLE_RATE_FILE_EMPLOYEE)
                    .table(BillableRate::Table)
                    .col(BillableRate::FileId)
                    .col(BillableRate::EmployeeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BILLABLE_RATE_FILE_ID)
                    .table(BillableRate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BILLABLE_RATE_EMPLOYEE_ID)
                    .table(BillableRate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BillableRate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BillableRate {
    Table,
    Id,
    FileId,
    EmployeeId,
    Rate,
}
