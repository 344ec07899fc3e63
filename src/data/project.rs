use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

pub struct ProjectRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    /// Creates a new instance of [`ProjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a project by name, creating it on first reference.
    pub async fn get_or_create(&self, name: &str) -> Result<entity::project::Model, DbErr> {
        if let Some(project) = self.get_by_name(name).await? {
            return Ok(project);
        }

        let project = entity::project::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        entity::prelude::Project::insert(project)
            .on_conflict(
                OnConflict::column(entity::project::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(self.db)
            .await?;

        self.get_by_name(name)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("project {name:?} missing after upsert")))
    }

    /// Gets a project by its unique name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find()
            .filter(entity::project::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets projects by their database ids
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::project::Model>, DbErr> {
        entity::prelude::Project::find()
            .filter(entity::project::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}
