use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle of an uploaded timesheet file.
///
/// A file only ever advances `Pending -> Loaded -> Processed`, or diverts to
/// `Failed` while ingestion or summary computation is in flight. `Failed` is
/// terminal; the file must be re-uploaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "LOADED")]
    Loaded,
    #[sea_orm(string_value = "PROCESSED")]
    Processed,
    #[sea_orm(string_value = "FAILED")]
    Failed,
}

/// An uploaded timesheet CSV file.
///
/// The raw upload bytes are kept on the row itself so ingestion and the
/// status transitions live inside the same transactional store.
/// `error_message` is populated only while `status` is [`FileStatus::Failed`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "timesheet_file")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub filename: String,
    pub content: Vec<u8>,
    pub status: FileStatus,
    pub error_message: Option<String>,
    pub uploaded_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::billable_rate::Entity")]
    BillableRate,
    #[sea_orm(has_many = "super::timesheet_invoice::Entity")]
    TimesheetInvoice,
    #[sea_orm(has_many = "super::invoice_summary::Entity")]
    InvoiceSummary,
}

impl Related<super::billable_rate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BillableRate.def()
    }
}

impl Related<super::timesheet_invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimesheetInvoice.def()
    }
}

impl Related<super::invoice_summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvoiceSummary.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
