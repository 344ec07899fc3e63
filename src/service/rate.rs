use std::collections::HashMap;

use rust_decimal::Decimal;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::{
    data::{billable_rate::BillableRateRepository, employee::EmployeeRepository},
    error::{pipeline::PipelineError, Error},
};

/// The ids a billing record needs once an employee's rate is settled.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedRate {
    /// Internal employee id.
    pub employee_id: i32,
    /// Id of the rate record binding (file, employee) to one rate.
    pub rate_id: i32,
}

struct CachedRate {
    resolved: ResolvedRate,
    rate: Decimal,
}

/// Binds each employee to exactly one billable rate for one file's run.
///
/// The registry is scoped to a single ingestion transaction. The first row
/// mentioning an employee settles that employee's rate for the whole file;
/// later rows must carry a decimal-equal rate or the run aborts.
pub struct RateRegistry {
    file_id: Uuid,
    cache: HashMap<i64, CachedRate>,
}

impl RateRegistry {
    /// Creates a registry for one file's ingestion run
    pub fn new(file_id: Uuid) -> Self {
        Self {
            file_id,
            cache: HashMap::new(),
        }
    }

    /// Resolves an employee's rate, creating employee and rate records on
    /// first sight.
    pub async fn resolve<C: ConnectionTrait>(
        &mut self,
        db: &C,
        employee_id: i64,
        rate: Decimal,
    ) -> Result<ResolvedRate, Error> {
        if let Some(cached) = self.cache.get(&employee_id) {
            if cached.rate != rate {
                return Err(PipelineError::ConflictingRate { employee_id }.into());
            }

            return Ok(cached.resolved);
        }

        let employee = EmployeeRepository::new(db).get_or_create(employee_id).await?;
        let record = BillableRateRepository::new(db)
            .create(self.file_id, employee.id, rate)
            .await?;

        let resolved = ResolvedRate {
            employee_id: employee.id,
            rate_id: record.id,
        };
        self.cache.insert(employee_id, CachedRate { resolved, rate });

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use billhours_test_utils::{fixtures, test_setup_with_tables};
    use rust_decimal::Decimal;
    use sea_orm::{EntityTrait, PaginatorTrait};

    use crate::error::{pipeline::PipelineError, Error};

    use super::RateRegistry;

    /// Repeated rows with the same rate reuse one rate record
    #[tokio::test]
    async fn repeated_rate_reuses_record() {
        let setup = test_setup_with_tables!(
            entity::prelude::Employee,
            entity::prelude::TimesheetFile,
            entity::prelude::BillableRate,
        )
        .unwrap();
        let db = &setup.state.db;

        let file = fixtures::insert_pending_file(db, "irrelevant").await.unwrap();
        let mut registry = RateRegistry::new(file.id);

        let first = registry.resolve(db, 1, Decimal::from(300)).await.unwrap();
        let second = registry.resolve(db, 1, Decimal::from(300)).await.unwrap();

        assert_eq!(first.rate_id, second.rate_id);
        assert_eq!(first.employee_id, second.employee_id);

        let count = entity::prelude::BillableRate::find().count(db).await.unwrap();
        assert_eq!(count, 1);
    }

    /// A decimal-equal rate written differently is not a conflict
    #[tokio::test]
    async fn equivalent_decimal_is_not_a_conflict() {
        let setup = test_setup_with_tables!(
            entity::prelude::Employee,
            entity::prelude::TimesheetFile,
            entity::prelude::BillableRate,
        )
        .unwrap();
        let db = &setup.state.db;

        let file = fixtures::insert_pending_file(db, "irrelevant").await.unwrap();
        let mut registry = RateRegistry::new(file.id);

        registry.resolve(db, 1, "300".parse().unwrap()).await.unwrap();
        let result = registry.resolve(db, 1, "300.00".parse().unwrap()).await;

        assert!(result.is_ok());
    }

    /// Two different rates for one employee in one file abort the run
    #[tokio::test]
    async fn conflicting_rate_is_rejected() {
        let setup = test_setup_with_tables!(
            entity::prelude::Employee,
            entity::prelude::TimesheetFile,
            entity::prelude::BillableRate,
        )
        .unwrap();
        let db = &setup.state.db;

        let file = fixtures::insert_pending_file(db, "irrelevant").await.unwrap();
        let mut registry = RateRegistry::new(file.id);

        registry.resolve(db, 1, Decimal::from(300)).await.unwrap();
        let err = registry.resolve(db, 1, Decimal::from(350)).await.unwrap_err();

        assert!(matches!(
            err,
            Error::PipelineError(PipelineError::ConflictingRate { employee_id: 1 })
        ));
        assert_eq!(
            err.to_string(),
            "Billable rate for employee 1 in same file can't have two different values"
        );
    }
}
