use sea_orm::entity::prelude::*;

/// The computed invoice summary for one processed file.
///
/// `project_summary` maps project name to an ordered list of per-employee
/// entries; `project_total_costs` maps project name to its total cost. All
/// decimal values inside both documents are fixed two-decimal strings.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invoice_summary")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub file_id: Uuid,
    pub project_summary: Json,
    pub project_total_costs: Json,
    pub created_at: DateTime,
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
}

impl Related<super::timesheet_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimesheetFile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
