//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use http::StatusCode;
use shared::DataEnvelope;
use shared::models::{DiningTable, DiningTableDraft, ReservationStatus, SeatRequest};

use crate::api::extract::{parse_id, read_body};
use crate::core::ServerState;
use crate::db::repository::{reservation, table};
use crate::rules::{
    check_capacity, check_not_seated, check_release, check_seating, check_transition,
    reservation_missing, seat_reservation_id, validate_table,
};
use crate::utils::{ApiResponse, AppError, AppResult, created, ok};

async fn load(state: &ServerState, raw_id: &str) -> AppResult<DiningTable> {
    let id = parse_id(raw_id).ok_or_else(|| AppError::table_not_found(raw_id))?;
    table::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::table_not_found(id))
}

/// GET /tables - 获取所有桌台 (按名称排序)
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<DiningTable>>> {
    let tables = table::find_all(&state.pool).await?;
    Ok(ok(tables))
}

/// GET /tables/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> AppResult<ApiResponse<DiningTable>> {
    Ok(ok(load(&state, &table_id).await?))
}

/// POST /tables - 创建桌台 (可直接绑定预订入座)
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<DataEnvelope<DiningTableDraft>>, JsonRejection>,
) -> AppResult<(StatusCode, ApiResponse<DiningTable>)> {
    let draft = read_body(payload)?;
    let new_table = validate_table(&draft)?;

    let bound = match new_table.reservation_id {
        Some(reservation_id) => {
            let bound = reservation::find_by_id(&state.pool, reservation_id)
                .await?
                .ok_or_else(|| reservation_missing(reservation_id))?;
            check_not_seated(&bound)?;
            check_capacity(&new_table.table_name, new_table.capacity, bound.people)?;
            check_transition(bound.status, ReservationStatus::Seated.as_str())?;
            Some(bound)
        }
        None => None,
    };

    let created_table = table::create(
        &state.pool,
        &new_table.table_name,
        new_table.capacity,
        bound.as_ref(),
    )
    .await?;

    tracing::info!(
        table_id = created_table.table_id,
        table_name = %created_table.table_name,
        reservation_id = ?created_table.reservation_id,
        "Table created"
    );
    Ok(created(created_table))
}

/// PUT /tables/:id/seat - 预订入座
pub async fn seat(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
    payload: Result<Json<DataEnvelope<SeatRequest>>, JsonRejection>,
) -> AppResult<ApiResponse<DiningTable>> {
    let request = read_body(payload)?;
    let reservation_id = seat_reservation_id(&request)?;

    let party = reservation::find_by_id(&state.pool, reservation_id)
        .await?
        .ok_or_else(|| reservation_missing(reservation_id))?;
    check_not_seated(&party)?;

    let target = load(&state, &table_id).await?;
    check_seating(&target, &party)?;
    check_transition(party.status, ReservationStatus::Seated.as_str())?;

    let seated = table::seat(&state.pool, target.table_id, &party).await?;

    tracing::info!(
        table_id = seated.table_id,
        reservation_id = party.reservation_id,
        people = party.people,
        "Party seated"
    );
    Ok(ok(seated))
}

/// DELETE /tables/:id/seat - 结束用餐, 释放桌台
pub async fn unassign(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> AppResult<ApiResponse<DiningTable>> {
    let target = load(&state, &table_id).await?;
    let reservation_id = check_release(&target)?;

    let party = reservation::find_by_id(&state.pool, reservation_id)
        .await?
        .ok_or_else(|| reservation_missing(reservation_id))?;
    check_transition(party.status, ReservationStatus::Finished.as_str())?;

    let freed = table::unassign(&state.pool, target.table_id, &party).await?;

    tracing::info!(
        table_id = freed.table_id,
        reservation_id,
        "Reservation finished, table released"
    );
    Ok(ok(freed))
}
