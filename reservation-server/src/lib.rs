//! Reservation Server - 餐厅预订与桌台管理服务
//!
//! # 架构概述
//!
//! - **业务规则** (`rules`): 预订/桌台校验流水线和状态迁移
//! - **数据库** (`db`): SQLite (sqlx) 存储，入座/结束在单个事务内完成
//! - **HTTP API** (`api`): `{ "data": ... }` 风格的 JSON 接口
//!
//! # 模块结构
//!
//! ```text
//! reservation-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── rules/         # 业务规则 (纯函数)
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 日志、时间、校验工具
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod rules;
pub mod utils;

// Re-export 公共类型
pub use api::build_app;
pub use core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 `.env`、读取配置、初始化日志
pub fn setup_environment() -> Result<Config, ServerError> {
    // .env 不存在时忽略
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)?;
    }
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    Ok(config)
}

pub fn print_banner(config: &Config) {
    println!(
        r#"
    ____                                 __  _
   / __ \___  ________  ______   ______ _/ /_(_)___  ____
  / /_/ / _ \/ ___/ _ \/ ___/ | / / __ `/ __/ / __ \/ __ \
 / _, _/  __(__  )  __/ /   | |/ / /_/ / /_/ / /_/ / / / /
/_/ |_|\___/____/\___/_/    |___/\__,_/\__/_/\____/_/ /_/
    "#
    );
    println!(
        "  v{} | {} | tz {} | port {}",
        env!("CARGO_PKG_VERSION"),
        config.environment,
        config.timezone,
        config.http_port
    );
    if !config.is_production() {
        println!("  database: {}", config.database_path().display());
    }
}
