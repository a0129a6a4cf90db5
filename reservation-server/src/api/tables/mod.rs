//! Dining Table API 模块

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::api::method_not_allowed;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/tables",
            get(handler::list).post(handler::create).fallback(method_not_allowed),
        )
        .route(
            "/tables/{table_id}",
            get(handler::get_by_id).fallback(method_not_allowed),
        )
        .route(
            "/tables/{table_id}/seat",
            put(handler::seat)
                .delete(handler::unassign)
                .fallback(method_not_allowed),
        )
}
