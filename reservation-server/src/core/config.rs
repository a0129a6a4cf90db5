use std::path::PathBuf;

use chrono::{NaiveTime, Weekday};
use chrono_tz::Tz;

use crate::core::ServerError;
use crate::rules::BusinessHours;
use crate::utils::time::{parse_time, parse_timezone, parse_weekday};

/// 服务器配置 - 预订服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 |
/// | DATABASE_PATH | $WORK_DIR/database/reservations.db | SQLite 文件 |
/// | HTTP_PORT | 5001 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 滚动日志目录 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | RESTAURANT_TIMEZONE | UTC | 餐厅所在时区 (IANA) |
/// | OPENING_TIME | 10:30 | 最早可预订时间 |
/// | LAST_SEATING_TIME | 21:30 | 最晚可预订时间 |
/// | CLOSED_WEEKDAY | tue | 每周休息日 |
///
/// # 示例
///
/// ```ignore
/// RESTAURANT_TIMEZONE=America/New_York HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库等文件
    pub work_dir: String,
    /// 显式指定的数据库文件
    pub database_path: Option<String>,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// 业务时区: 决定 "现在" 和 "今天"
    pub timezone: Tz,
    pub business_hours: BusinessHours,
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_time(key: &str, default: NaiveTime) -> Result<NaiveTime, ServerError> {
    match env_var(key) {
        Some(v) => parse_time(v.trim()).ok_or_else(|| ServerError::Config(format!("{key}={v} is not HH:MM"))),
        None => Ok(default),
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值；时区、营业时间、休息日无法解析时启动失败。
    pub fn from_env() -> Result<Self, ServerError> {
        let defaults = Self::default();

        let timezone = match env_var("RESTAURANT_TIMEZONE") {
            Some(v) => parse_timezone(&v)
                .ok_or_else(|| ServerError::Config(format!("RESTAURANT_TIMEZONE={v} is not an IANA time zone")))?,
            None => defaults.timezone,
        };

        let closed_on: Weekday = match env_var("CLOSED_WEEKDAY") {
            Some(v) => parse_weekday(&v)
                .ok_or_else(|| ServerError::Config(format!("CLOSED_WEEKDAY={v} is not a weekday")))?,
            None => defaults.business_hours.closed_on,
        };

        let business_hours = BusinessHours {
            opens_at: env_time("OPENING_TIME", defaults.business_hours.opens_at)?,
            last_seating: env_time("LAST_SEATING_TIME", defaults.business_hours.last_seating)?,
            closed_on,
        };
        if business_hours.opens_at > business_hours.last_seating {
            return Err(ServerError::Config(
                "OPENING_TIME must not be later than LAST_SEATING_TIME".into(),
            ));
        }

        Ok(Self {
            work_dir: env_var("WORK_DIR").unwrap_or(defaults.work_dir),
            database_path: env_var("DATABASE_PATH"),
            http_port: env_var("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            environment: env_var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: env_var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: env_var("LOG_DIR"),
            request_timeout_ms: env_var("REQUEST_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
            timezone,
            business_hours,
        })
    }

    /// 数据库文件路径
    pub fn database_path(&self) -> PathBuf {
        match &self.database_path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(&self.work_dir)
                .join("database")
                .join("reservations.db"),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: "./data".into(),
            database_path: None,
            http_port: 5001,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            request_timeout_ms: 30000,
            timezone: Tz::UTC,
            business_hours: BusinessHours::default(),
        }
    }
}
