use sea_orm::entity::prelude::*;

/// The billable rate of one employee within one uploaded file.
///
/// At most one row may exist per `(file_id, employee_id)` pair; a second,
/// different rate for the same employee in the same file is a validation
/// failure that aborts the file's ingestion.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "billable_rate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub file_id: Uuid,
    pub employee_id: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub rate: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::timesheet_file::Entity",
        from = "Column::FileId",
        to = "super::timesheet_file::Column::Id",
        on_delete = "Cascade"
    )]
    TimesheetFile,
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id",
        on_delete = "Cascade"
    )]
    Employee,
    #[sea_orm(has_many = "super::timesheet_invoice::Entity")]
    TimesheetInvoice,
}

impl Related<super::timesheet_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimesheetFile.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::timesheet_invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimesheetInvoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
