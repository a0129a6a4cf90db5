//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use http::StatusCode;
use serde::Deserialize;
use shared::DataEnvelope;
use shared::models::{Reservation, ReservationDraft, StatusChange, StatusView};

use crate::api::extract::{parse_id, read_body};
use crate::core::ServerState;
use crate::db::repository::reservation;
use crate::rules::{check_transition, validate_new_reservation, validate_reservation};
use crate::utils::time::{DATE_FORMAT, parse_date};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, created, ok};

/// `GET /reservations` query
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub date: Option<String>,
    pub mobile_number: Option<String>,
}

async fn load(state: &ServerState, raw_id: &str) -> AppResult<Reservation> {
    let id = parse_id(raw_id).ok_or_else(|| AppError::reservation_not_found(raw_id))?;
    reservation::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::reservation_not_found(id))
}

/// GET /reservations?date=YYYY-MM-DD | ?mobile_number=... - 按日期列出 / 按电话搜索
///
/// 两个参数都没有时列出今天 (餐厅时区) 的预订。
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<ApiResponse<Vec<Reservation>>> {
    let date = query.date.filter(|d| !d.trim().is_empty());
    let mobile_number = query.mobile_number.filter(|m| !m.trim().is_empty());

    let reservations = match (date, mobile_number) {
        (Some(date), _) => {
            let date = parse_date(date.trim()).ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::InvalidReservationDate,
                    format!("Invalid date: {date}"),
                )
            })?;
            reservation::find_by_date(&state.pool, &date.format(DATE_FORMAT).to_string()).await?
        }
        (None, Some(mobile_number)) => reservation::search_by_phone(&state.pool, &mobile_number).await?,
        (None, None) => {
            let today = state.today().format(DATE_FORMAT).to_string();
            reservation::find_by_date(&state.pool, &today).await?
        }
    };
    Ok(ok(reservations))
}

/// POST /reservations - 创建预订
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<DataEnvelope<ReservationDraft>>, JsonRejection>,
) -> AppResult<(StatusCode, ApiResponse<Reservation>)> {
    let draft = read_body(payload)?;
    let details = validate_new_reservation(&draft, state.now_local(), state.hours())?;
    let created_reservation = reservation::create(&state.pool, &details).await?;

    tracing::info!(
        reservation_id = created_reservation.reservation_id,
        date = %created_reservation.reservation_date,
        time = %created_reservation.reservation_time,
        people = created_reservation.people,
        "Reservation booked"
    );
    Ok(created(created_reservation))
}

/// GET /reservations/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(reservation_id): Path<String>,
) -> AppResult<ApiResponse<Reservation>> {
    Ok(ok(load(&state, &reservation_id).await?))
}

/// PUT /reservations/:id - 全量更新预订 (不改变状态)
pub async fn update(
    State(state): State<ServerState>,
    Path(reservation_id): Path<String>,
    payload: Result<Json<DataEnvelope<ReservationDraft>>, JsonRejection>,
) -> AppResult<ApiResponse<Reservation>> {
    let existing = load(&state, &reservation_id).await?;
    let draft = read_body(payload)?;
    let details = validate_reservation(&draft, state.now_local(), state.hours())?;
    let updated = reservation::update(&state.pool, existing.reservation_id, &details).await?;
    Ok(ok(updated))
}

/// PUT /reservations/:id/status - 更新预订状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(reservation_id): Path<String>,
    payload: Result<Json<DataEnvelope<StatusChange>>, JsonRejection>,
) -> AppResult<ApiResponse<StatusView>> {
    let existing = load(&state, &reservation_id).await?;
    let change = read_body(payload)?;
    let requested = change.status.unwrap_or_default();
    let next = check_transition(existing.status, &requested)?;

    let status = reservation::update_status(&state.pool, existing.reservation_id, existing.status, next).await?;

    tracing::info!(
        reservation_id = existing.reservation_id,
        from = %existing.status,
        to = %status,
        "Reservation status changed"
    );
    Ok(ok(StatusView { status }))
}
