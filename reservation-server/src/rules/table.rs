//! Table validation and seating rules

use serde_json::Value;
use shared::models::{DiningTable, DiningTableCreate, DiningTableDraft, Reservation, ReservationStatus, SeatRequest};

use crate::utils::validation::{MAX_NAME_LEN, is_falsy, loose_id, positive_int};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Validate a create payload
///
/// `table_name` needs at least 2 characters as sent and may not be blank,
/// `capacity` must be a positive integer. A truthy `reservation_id` pre-binds
/// the new table.
pub fn validate_table(draft: &DiningTableDraft) -> AppResult<DiningTableCreate> {
    let table_name = draft.table_name.as_deref().unwrap_or_default();
    let name_len = table_name.chars().count();
    if table_name.trim().is_empty() || !(2..=MAX_NAME_LEN).contains(&name_len) {
        return Err(AppError::with_message(ErrorCode::InvalidTableName, "Invalid table_name"));
    }

    let capacity = draft
        .capacity
        .as_ref()
        .and_then(positive_int)
        .ok_or_else(|| AppError::with_message(ErrorCode::InvalidCapacity, "Invalid capacity"))?;

    let reservation_id = match draft.reservation_id.as_ref() {
        None => None,
        Some(v) if is_falsy(v) => None,
        Some(v) => Some(loose_id(v).ok_or_else(|| {
            AppError::validation("Invalid reservation_id").with_detail("reservation_id", v.clone())
        })?),
    };

    Ok(DiningTableCreate {
        table_name: table_name.to_string(),
        capacity,
        reservation_id,
    })
}

/// Extract the reservation id from a seat request
///
/// Missing (or falsy) is a 400; a value that can never name a reservation is
/// reported like an unknown reservation.
pub fn seat_reservation_id(req: &SeatRequest) -> AppResult<i64> {
    let value = match req.reservation_id.as_ref() {
        Some(v) if !is_falsy(v) => v,
        _ => {
            return Err(AppError::with_message(
                ErrorCode::MissingReservationId,
                "Missing reservation_id",
            ));
        }
    };
    loose_id(value).ok_or_else(|| reservation_missing(display_value(value)))
}

/// `404 "<id> does not exist"`
pub fn reservation_missing(id: impl std::fmt::Display) -> AppError {
    AppError::with_message(ErrorCode::ReservationNotFound, format!("{id} does not exist"))
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A seated party cannot be seated again
pub fn check_not_seated(reservation: &Reservation) -> AppResult<()> {
    if reservation.status == ReservationStatus::Seated {
        return Err(AppError::with_message(ErrorCode::AlreadySeated, "Party already seated")
            .with_detail("reservation_id", reservation.reservation_id));
    }
    Ok(())
}

/// The party must fit
pub fn check_capacity(table_name: &str, capacity: i32, people: i32) -> AppResult<()> {
    if capacity < people {
        return Err(AppError::with_message(
            ErrorCode::CapacityExceeded,
            format!("The max capacity for {table_name} is {capacity}!"),
        ));
    }
    Ok(())
}

/// Capacity first, then occupancy
pub fn check_seating(table: &DiningTable, reservation: &Reservation) -> AppResult<()> {
    check_capacity(&table.table_name, table.capacity, reservation.people)?;
    if table.occupied {
        return Err(AppError::with_message(
            ErrorCode::TableOccupied,
            format!("{} is already occupied!", table.table_name),
        ));
    }
    Ok(())
}

/// An occupied table can be released; returns the reservation it held
pub fn check_release(table: &DiningTable) -> AppResult<i64> {
    match (table.occupied, table.reservation_id) {
        (true, Some(reservation_id)) => Ok(reservation_id),
        (false, _) => Err(AppError::with_message(
            ErrorCode::TableNotOccupied,
            format!("{} is not occupied", table.table_name),
        )),
        (true, None) => Err(AppError::internal(format!(
            "table {} is occupied without a reservation",
            table.table_id
        ))),
    }
}
