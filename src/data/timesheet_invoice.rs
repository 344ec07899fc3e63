use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct TimesheetInvoiceRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimesheetInvoiceRepository<'a, C> {
    /// Creates a new instance of [`TimesheetInvoiceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a batch of billing records in one statement
    pub async fn insert_many(
        &self,
        records: Vec<entity::timesheet_invoice::ActiveModel>,
    ) -> Result<(), DbErr> {
        if records.is_empty() {
            return Ok(());
        }

        entity::prelude::TimesheetInvoice::insert_many(records)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets all billing records for a file in insertion order
    pub async fn get_by_file(
        &self,
        file_id: Uuid,
    ) -> Result<Vec<entity::timesheet_invoice::Model>, DbErr> {
        entity::prelude::TimesheetInvoice::find()
            .filter(entity::timesheet_invoice::Column::FileId.eq(file_id))
            .order_by_asc(entity::timesheet_invoice::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts billing records persisted for a file
    pub async fn count_by_file(&self, file_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::TimesheetInvoice::find()
            .filter(entity::timesheet_invoice::Column::FileId.eq(file_id))
            .count(self.db)
            .await
    }
}
