//! Health Check Routes

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::api::method_not_allowed;
use crate::core::ServerState;
use crate::db::DbService;
use crate::utils::{ApiResponse, AppResult, ok};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health - 健康检查 (含数据库探测)
async fn health(State(state): State<ServerState>) -> AppResult<ApiResponse<HealthResponse>> {
    DbService::ping(&state.pool).await?;
    Ok(ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health).fallback(method_not_allowed))
}
