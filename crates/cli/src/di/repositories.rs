use sitegate_infrastructure::repositories::{
    SqliteSiteStateRepository, SqliteUsageStateRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub site_state: Arc<SqliteSiteStateRepository>,
    pub usage_state: Arc<SqliteUsageStateRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            site_state: Arc::new(SqliteSiteStateRepository::new(pool.clone())),
            usage_state: Arc::new(SqliteUsageStateRepository::new(pool)),
        }
    }
}
