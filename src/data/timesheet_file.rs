use chrono::Utc;
use entity::timesheet_file::FileStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

pub struct TimesheetFileRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimesheetFileRepository<'a, C> {
    /// Creates a new instance of [`TimesheetFileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a PENDING file record holding the raw upload bytes
    pub async fn create(
        &self,
        filename: &str,
        content: Vec<u8>,
    ) -> Result<entity::timesheet_file::Model, DbErr> {
        let file = entity::timesheet_file::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            filename: ActiveValue::Set(filename.to_string()),
            content: ActiveValue::Set(content),
            status: ActiveValue::Set(FileStatus::Pending),
            error_message: ActiveValue::Set(None),
            uploaded_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        file.insert(self.db).await
    }

    /// Gets a file by its id
    pub async fn get(
        &self,
        file_id: Uuid,
    ) -> Result<Option<entity::timesheet_file::Model>, DbErr> {
        entity::prelude::TimesheetFile::find_by_id(file_id)
            .one(self.db)
            .await
    }

    /// Advances the file to `status` and clears any error message
    pub async fn set_status(
        &self,
        file_id: Uuid,
        status: FileStatus,
    ) -> Result<entity::timesheet_file::Model, DbErr> {
        let file = entity::timesheet_file::ActiveModel {
            id: ActiveValue::Set(file_id),
            status: ActiveValue::Set(status),
            error_message: ActiveValue::Set(None),
            ..Default::default()
        };

        file.update(self.db).await
    }

    /// Moves the file to FAILED with a descriptive error message
    pub async fn mark_failed(
        &self,
        file_id: Uuid,
        message: &str,
    ) -> Result<entity::timesheet_file::Model, DbErr> {
        let file = entity::timesheet_file::ActiveModel {
            id: ActiveValue::Set(file_id),
            status: ActiveValue::Set(FileStatus::Failed),
            error_message: ActiveValue::Set(Some(message.to_string())),
            ..Default::default()
        };

        file.update(self.db).await
    }
}
