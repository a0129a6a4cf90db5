//! Request body and path helpers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use shared::DataEnvelope;

use crate::utils::{AppError, AppResult};

/// Unwrap a `{ "data": ... }` body
///
/// Malformed JSON is a 400 `InvalidRequest`; a body without `data` is a
/// 400 "Data Missing!".
pub fn read_body<T>(payload: Result<Json<DataEnvelope<T>>, JsonRejection>) -> AppResult<T> {
    let Json(envelope) =
        payload.map_err(|rejection| AppError::invalid_request(rejection.body_text()))?;
    envelope.into_data()
}

/// Numeric path id; anything else can never match a row
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}
