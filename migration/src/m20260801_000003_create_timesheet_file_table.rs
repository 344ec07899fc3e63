use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimesheetFile::Table)
                    .if_not_exists()
                    .col(pk_uuid(TimesheetFile::Id))
                    .col(string(TimesheetFile::Filename))
                    .col(blob(TimesheetFile::Content))
                    .col(string_len(TimesheetFile::Status, 16))
                    .col(string_null(TimesheetFile::ErrorMessage))
                    .col(timestamp(TimesheetFile::UploadedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimesheetFile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TimesheetFile {
    Table,
    Id,
    Filename,
    Content,
    Status,
    ErrorMessage,
    UploadedAt,
}
