use apalis_redis::RedisStorage;
use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    error::Error,
    model::worker::WorkerJob,
    worker::handle_job,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and spawn the background worker pool
pub async fn start_workers(
    config: &Config,
    db: DatabaseConnection,
) -> Result<RedisStorage<WorkerJob>, Error> {
    use apalis::prelude::*;

    let conn = apalis_redis::connect(config.valkey_url.to_string())
        .await
        .map_err(|e| crate::error::worker::WorkerError::Connect(e.to_string()))?;
    let storage = RedisStorage::new(conn);
    let workers = config.workers;

    // The worker gets its own storage handle for chaining follow-up jobs.
    let worker_storage = storage.clone();
    let storage_clone = storage.clone();

    let _ = tokio::spawn(async move {
        WorkerBuilder::new("billhours-worker")
            .concurrency(workers)
            .data(db)
            .data(worker_storage)
            .backend(storage_clone)
            .build_fn(handle_job)
            .run()
            .await;
    });

    Ok(storage)
}
