use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

pub struct InvoiceSummaryRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvoiceSummaryRepository<'a, C> {
    /// Creates a new instance of [`InvoiceSummaryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persists the computed summary documents for a file
    pub async fn create(
        &self,
        file_id: Uuid,
        project_summary: serde_json::Value,
        project_total_costs: serde_json::Value,
    ) -> Result<entity::invoice_summary::Model, DbErr> {
        let summary = entity::invoice_summary::ActiveModel {
            file_id: ActiveValue::Set(file_id),
            project_summary: ActiveValue::Set(project_summary),
            project_total_costs: ActiveValue::Set(project_total_costs),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        summary.insert(self.db).await
    }

    /// Gets the summary computed for a file, if any
    pub async fn get_by_file(
        &self,
        file_id: Uuid,
    ) -> Result<Option<entity::invoice_summary::Model>, DbErr> {
        entity::prelude::InvoiceSummary::find()
            .filter(entity::invoice_summary::Column::FileId.eq(file_id))
            .one(self.db)
            .await
    }
}
