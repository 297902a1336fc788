use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;

/// 服务器状态 - 所有 handler 共享
///
/// Cheap to clone: the config is small and the pool is reference counted.
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// Create the work dir, open the database and run migrations
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        let db = DbService::new(&config.database_path).await?;
        tracing::info!(path = %config.database_path, "Database ready");
        Ok(Self::new(config.clone(), db))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    /// 业务时区的今天
    pub fn today(&self) -> chrono::NaiveDate {
        crate::utils::time::business_today(self.config.timezone)
    }
}
