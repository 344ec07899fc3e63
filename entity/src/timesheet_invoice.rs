use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::entity::prelude::*;

/// One billing record, derived from a single valid timesheet row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "timesheet_invoice")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub file_id: Uuid,
    pub employee_id: i32,
    pub project_id: i32,
    pub billable_rate_id: i32,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
}

impl Model {
    /// Hours worked between `start_time` and `end_time`, rounded to two
    /// decimal places with ties away from zero.
    ///
    /// Spans never cross midnight; ingestion rejects rows where the end time
    /// is not strictly after the start time.
    pub fn hours_worked(&self) -> Decimal {
        let seconds = (self.end_time - self.start_time).num_seconds();
        (Decimal::from(seconds) / Decimal::from(3600))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
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
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
    #[sea_orm(
        belongs_to = "super::billable_rate::Entity",
        from = "Column::BillableRateId",
        to = "super::billable_rate::Column::Id",
        on_delete = "Cascade"
    )]
    BillableRate,
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

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::billable_rate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BillableRate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn invoice(start: &str, end: &str) -> super::Model {
        super::Model {
            id: 1,
            file_id: Uuid::new_v4(),
            employee_id: 1,
            project_id: 1,
            billable_rate_id: 1,
            date: NaiveDate::from_ymd_opt(2019, 7, 1).unwrap(),
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
        }
    }

    #[test]
    fn full_day_is_eight_hours() {
        assert_eq!(invoice("09:00", "17:00").hours_worked(), Decimal::new(800, 2));
    }

    #[test]
    fn quarter_hours_are_kept() {
        assert_eq!(invoice("11:45", "16:00").hours_worked(), Decimal::new(425, 2));
    }

    #[test]
    fn half_hours_are_kept() {
        assert_eq!(invoice("09:30", "17:00").hours_worked(), Decimal::new(750, 2));
    }
}
