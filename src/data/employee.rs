use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

pub struct EmployeeRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    /// Creates a new instance of [`EmployeeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets an employee by its external id, creating it on first reference.
    ///
    /// Creation goes through an insert-or-ignore on the unique natural key so
    /// concurrent ingestion of different files referencing the same employee
    /// cannot create duplicates.
    pub async fn get_or_create(&self, employee_id: i64) -> Result<entity::employee::Model, DbErr> {
        if let Some(employee) = self.get_by_employee_id(employee_id).await? {
            return Ok(employee);
        }

        let employee = entity::employee::ActiveModel {
            employee_id: ActiveValue::Set(employee_id),
            ..Default::default()
        };

        entity::prelude::Employee::insert(employee)
            .on_conflict(
                OnConflict::column(entity::employee::Column::EmployeeId)
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(self.db)
            .await?;

        self.get_by_employee_id(employee_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("employee {employee_id} missing after upsert"))
        })
    }

    /// Gets an employee by its external employee id
    pub async fn get_by_employee_id(
        &self,
        employee_id: i64,
    ) -> Result<Option<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find()
            .filter(entity::employee::Column::EmployeeId.eq(employee_id))
            .one(self.db)
            .await
    }

    /// Gets employees by their database ids
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find()
            .filter(entity::employee::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}
