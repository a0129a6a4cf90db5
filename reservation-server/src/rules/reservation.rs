//! Reservation validation pipeline
//!
//! Order of checks (first failure wins):
//! 1. required fields present and non-blank
//! 2. `people` is a positive integer
//! 3. `reservation_date` is `YYYY-MM-DD`
//! 4. date + time lies strictly after `now` (skipped when the time is malformed)
//! 5. date is not the closed weekday
//! 6. `reservation_time` is `HH:MM[:SS]` and inside business hours
//!
//! Create additionally rejects `seated` / `finished` as the initial status.

use chrono::NaiveDateTime;
use shared::models::{ReservationDetails, ReservationDraft, ReservationStatus};

use super::BusinessHours;
use crate::utils::time::{DATE_FORMAT, TIME_FORMAT, parse_date, parse_time};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, is_present, positive_int, required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Validate a create / full-update payload, returning canonical details
pub fn validate_reservation(
    draft: &ReservationDraft,
    now: NaiveDateTime,
    hours: &BusinessHours,
) -> AppResult<ReservationDetails> {
    let first_name = required_text(draft.first_name.as_deref(), "first_name", MAX_NAME_LEN)?;
    let last_name = required_text(draft.last_name.as_deref(), "last_name", MAX_NAME_LEN)?;
    let mobile_number = required_text(
        draft.mobile_number.as_deref(),
        "mobile_number",
        MAX_SHORT_TEXT_LEN,
    )?;
    let date_raw = required_text(
        draft.reservation_date.as_deref(),
        "reservation_date",
        MAX_SHORT_TEXT_LEN,
    )?;
    let time_raw = required_text(
        draft.reservation_time.as_deref(),
        "reservation_time",
        MAX_SHORT_TEXT_LEN,
    )?;
    let people = draft
        .people
        .as_ref()
        .filter(|v| is_present(v))
        .ok_or_else(|| AppError::required_field("people"))?;

    let people = positive_int(people).ok_or_else(|| {
        AppError::with_message(ErrorCode::InvalidPartySize, "number of people is invalid")
    })?;

    let date = parse_date(&date_raw).ok_or_else(|| {
        AppError::with_message(ErrorCode::InvalidReservationDate, "reservation_date is invalid!")
            .with_detail("reservation_date", date_raw.as_str())
    })?;

    let time = parse_time(&time_raw);
    if let Some(time) = time
        && date.and_time(time) <= now
    {
        return Err(AppError::with_message(
            ErrorCode::InvalidReservationDate,
            "Reservation must be made for a future date and time",
        ));
    }

    if hours.is_closed_on(date) {
        return Err(AppError::with_message(
            ErrorCode::ClosedDay,
            hours.closed_day_message(),
        ));
    }

    let time = time.ok_or_else(|| {
        AppError::with_message(ErrorCode::OutsideBusinessHours, "reservation_time is invalid!")
            .with_detail("reservation_time", time_raw.as_str())
    })?;

    if !hours.accepts(time) {
        return Err(AppError::with_message(
            ErrorCode::OutsideBusinessHours,
            "Restaurant is closed during requested reservation time.",
        ));
    }

    Ok(ReservationDetails {
        first_name,
        last_name,
        mobile_number,
        reservation_date: date.format(DATE_FORMAT).to_string(),
        reservation_time: time.format(TIME_FORMAT).to_string(),
        people,
    })
}

/// A new reservation may not start out `seated` or `finished`
pub fn check_initial_status(status: Option<&str>) -> AppResult<()> {
    match status {
        Some(s) if s == ReservationStatus::Seated.as_str() || s == ReservationStatus::Finished.as_str() => {
            Err(AppError::with_message(
                ErrorCode::IllegalInitialStatus,
                "status can't be seated or finished",
            ))
        }
        _ => Ok(()),
    }
}

/// Full create pipeline
pub fn validate_new_reservation(
    draft: &ReservationDraft,
    now: NaiveDateTime,
    hours: &BusinessHours,
) -> AppResult<ReservationDetails> {
    let details = validate_reservation(draft, now, hours)?;
    check_initial_status(draft.status.as_deref())?;
    Ok(details)
}
