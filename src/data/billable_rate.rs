use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

pub struct BillableRateRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BillableRateRepository<'a, C> {
    /// Creates a new instance of [`BillableRateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a rate record tying (file, employee) to one billable rate
    pub async fn create(
        &self,
        file_id: Uuid,
        employee_id: i32,
        rate: Decimal,
    ) -> Result<entity::billable_rate::Model, DbErr> {
        let record = entity::billable_rate::ActiveModel {
            file_id: ActiveValue::Set(file_id),
            employee_id: ActiveValue::Set(employee_id),
            rate: ActiveValue::Set(rate),
            ..Default::default()
        };

        record.insert(self.db).await
    }

    /// Gets the rate record for one employee within one file
    pub async fn get_by_file_and_employee(
        &self,
        file_id: Uuid,
        employee_id: i32,
    ) -> Result<Option<entity::billable_rate::Model>, DbErr> {
        entity::prelude::BillableRate::find()
            .filter(entity::billable_rate::Column::FileId.eq(file_id))
            .filter(entity::billable_rate::Column::EmployeeId.eq(employee_id))
            .one(self.db)
            .await
    }

    /// Gets all rate records registered for a file
    pub async fn get_by_file(
        &self,
        file_id: Uuid,
    ) -> Result<Vec<entity::billable_rate::Model>, DbErr> {
        entity::prelude::BillableRate::find()
            .filter(entity::billable_rate::Column::FileId.eq(file_id))
            .all(self.db)
            .await
    }
}
