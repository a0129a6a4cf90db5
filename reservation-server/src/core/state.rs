use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::SqlitePool;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::rules::BusinessHours;
use crate::utils::time::{local_now, local_today};

/// 服务器状态 - 所有 handler 共享
///
/// Clone 只复制 `Arc` 和连接池句柄。
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub pool: SqlitePool,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self {
            config: Arc::new(config),
            pool,
        }
    }

    /// 打开 (必要时创建) 数据库文件并构建状态
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_path = config.database_path();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db_path = db_path
            .to_str()
            .ok_or_else(|| ServerError::Config(format!("database path {} is not UTF-8", db_path.display())))?;

        let db = DbService::new(db_path).await?;
        Ok(Self::new(config.clone(), db.pool))
    }

    /// 当前时刻 (餐厅时区)
    pub fn now_local(&self) -> NaiveDateTime {
        local_now(self.config.timezone)
    }

    /// 今天 (餐厅时区)
    pub fn today(&self) -> NaiveDate {
        local_today(self.config.timezone)
    }

    pub fn hours(&self) -> &BusinessHours {
        &self.config.business_hours
    }
}
