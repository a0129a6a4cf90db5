//! Reservation status transitions
//!
//! The one place that decides whether a reservation may move to a new
//! status. Used by the status endpoint, by seating and finishing a table,
//! and by creating a table already bound to a reservation.

use shared::models::ReservationStatus;

use crate::utils::{AppError, AppResult, ErrorCode};

/// Check a requested status against the current one
///
/// `cancelled` is always accepted. Otherwise a finished reservation is
/// frozen, and the request must name `booked`, `seated` or `finished`.
pub fn check_transition(current: ReservationStatus, requested: &str) -> AppResult<ReservationStatus> {
    if requested == ReservationStatus::Cancelled.as_str() {
        return Ok(ReservationStatus::Cancelled);
    }

    if current == ReservationStatus::Finished {
        return Err(AppError::with_message(
            ErrorCode::ReservationFinished,
            "A finished reservation cannot be updated.",
        ));
    }

    match requested.parse::<ReservationStatus>() {
        Ok(next) => Ok(next),
        Err(_) => Err(AppError::with_message(ErrorCode::UnknownStatus, "unknown status.")
            .with_detail("status", requested)),
    }
}
