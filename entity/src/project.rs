use sea_orm::entity::prelude::*;

/// A project referenced by timesheet rows, keyed by its unique name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::timesheet_invoice::Entity")]
    TimesheetInvoice,
}

impl Related<super::timesheet_invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimesheetInvoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
