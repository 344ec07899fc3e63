use apalis_redis::RedisStorage;
use sea_orm::DatabaseConnection;

use crate::model::worker::WorkerJob;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jobs: RedisStorage<WorkerJob>,
}
