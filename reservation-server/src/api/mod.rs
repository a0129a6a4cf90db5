//! HTTP API
//!
//! # 路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 健康检查 |
//! | /reservations | GET, POST | 按日期列出 / 按电话搜索 / 创建预订 |
//! | /reservations/{reservation_id} | GET, PUT | 读取 / 全量更新 |
//! | /reservations/{reservation_id}/status | PUT | 更新状态 |
//! | /tables | GET, POST | 列出 / 创建桌台 |
//! | /tables/{table_id} | GET | 读取桌台 |
//! | /tables/{table_id}/seat | PUT, DELETE | 入座 / 结束 |
//!
//! 未定义的方法返回 405，未知路径返回 404。

pub mod health;
pub mod reservations;
pub mod tables;

mod extract;

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::{BoxError, Router, middleware};
use http::{Method, Uri};
use tower::ServiceBuilder;
use tower::timeout::error::Elapsed;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;
use crate::utils::{AppError, ErrorCode};

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// 405 for a known path with an unsupported method
pub(crate) async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(method, uri.path())
}

/// 404 for an unknown path
async fn path_not_found(uri: Uri) -> AppError {
    AppError::with_message(ErrorCode::NotFound, format!("Path not found: {}", uri.path()))
}

/// 超时映射为 408，保持统一的错误响应体
async fn handle_timeout(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::new(ErrorCode::RequestTimeout)
    } else {
        AppError::internal(err.to_string())
    }
}

/// 请求超时层
pub(crate) fn with_request_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_timeout))
            .timeout(timeout),
    )
}

/// Build the Axum router with state and middleware
pub fn build_app(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    let router = Router::<ServerState>::new()
        .merge(health::router())
        .merge(reservations::router())
        .merge(tables::router())
        .fallback(path_not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(1024 * 1024)); // 1MB

    with_request_timeout(router, timeout)
        .layer(CorsLayer::permissive())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
