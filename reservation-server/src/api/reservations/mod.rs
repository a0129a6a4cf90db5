//! Reservation API 模块

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::api::method_not_allowed;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/reservations",
            get(handler::list).post(handler::create).fallback(method_not_allowed),
        )
        .route(
            "/reservations/{reservation_id}",
            get(handler::get_by_id)
                .put(handler::update)
                .fallback(method_not_allowed),
        )
        .route(
            "/reservations/{reservation_id}/status",
            put(handler::update_status).fallback(method_not_allowed),
        )
}
