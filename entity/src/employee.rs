use sea_orm::entity::prelude::*;

/// An employee referenced by timesheet rows.
///
/// `employee_id` is the externally supplied identity and is unique across the
/// whole system, not per file; rows are created lazily on first reference.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub employee_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::billable_rate::Entity")]
    BillableRate,
    #[sea_orm(has_many = "super::timesheet_invoice::Entity")]
    TimesheetInvoice,
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

impl ActiveModelBehavior for ActiveModel {}
