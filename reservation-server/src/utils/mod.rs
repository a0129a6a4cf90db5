//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`ApiResponse`] - `{ "data": ... }` 响应结构 (from shared::error)
//! - [`logger`] - 日志初始化
//! - [`time`] - 营业时区下的日期/时间解析
//! - [`validation`] - 请求字段校验

pub mod logger;
pub mod time;
pub mod validation;

// Re-export error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use shared::error::{created, ok};
