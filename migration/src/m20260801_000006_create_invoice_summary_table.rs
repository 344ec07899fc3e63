use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000003_create_timesheet_file_table::TimesheetFile;

static FK_INVOICE_SUMMARY_FILE_ID: &str = "fk_invoice_summary_file_id";
static IDX_INVOICE_SUMMARY_FILE_ID: &str = "idx_invoice_summary_file_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InvoiceSummary::Table)
                    .if_not_exists()
                    .col(pk_auto(InvoiceSummary::Id))
                    .col(uuid(InvoiceSummary::FileId))
                    .col(json(InvoiceSummary::ProjectSummary))
                    .col(json(InvoiceSummary::ProjectTotalCosts))
                    .col(timestamp(InvoiceSummary::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVOICE_SUMMARY_FILE_ID)
                    .from_tbl(InvoiceSummary::Table)
                    .from_col(InvoiceSummary::FileId)
                    .to_tbl(TimesheetFile::Table)
                    .to_col(TimesheetFile::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVOICE_SUMMARY_FILE_ID)
                    .table(InvoiceSummary::Table)
                    .col(InvoiceSummary::FileId)
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
                    .name(FK_INVOICE_SUMMARY_FILE_ID)
                    .table(InvoiceSummary::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InvoiceSummary::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InvoiceSummary {
    Table,
    Id,
    FileId,
    ProjectSummary,
    ProjectTotalCosts,
    CreatedAt,
}
