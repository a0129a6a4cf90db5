//! Unified error codes for the reservation service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Reservation errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the front end can
/// switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// HTTP method not supported by the route
    MethodNotAllowed = 9,
    /// Request did not complete within the configured timeout
    RequestTimeout = 10,

    // ==================== 4xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 4001,
    /// Party size is not a positive integer
    InvalidPartySize = 4002,
    /// Reservation date malformed or not in the future
    InvalidReservationDate = 4003,
    /// Restaurant closed on the requested day
    ClosedDay = 4004,
    /// Requested time outside business hours
    OutsideBusinessHours = 4005,
    /// A new reservation cannot start seated or finished
    IllegalInitialStatus = 4006,
    /// Finished reservations accept no further status changes
    ReservationFinished = 4007,
    /// Unknown reservation status
    UnknownStatus = 4008,
    /// Party already seated
    AlreadySeated = 4009,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table name missing or too short
    InvalidTableName = 7002,
    /// Table capacity is not a positive integer
    InvalidCapacity = 7003,
    /// Party larger than table capacity
    CapacityExceeded = 7004,
    /// Table already occupied
    TableOccupied = 7005,
    /// Table is not occupied
    TableNotOccupied = 7006,
    /// Seat request without reservation_id
    MissingReservationId = 7007,
    /// Table changed concurrently, nothing was written
    TableConflict = 7008,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::MethodNotAllowed => "Method not allowed",
            ErrorCode::RequestTimeout => "Request timed out",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::InvalidPartySize => "Number of people is invalid",
            ErrorCode::InvalidReservationDate => "Reservation date is invalid or in the past",
            ErrorCode::ClosedDay => "Restaurant is closed on the requested day",
            ErrorCode::OutsideBusinessHours => "Requested time is outside business hours",
            ErrorCode::IllegalInitialStatus => "Status can't be seated or finished",
            ErrorCode::ReservationFinished => "A finished reservation cannot be updated",
            ErrorCode::UnknownStatus => "Unknown status",
            ErrorCode::AlreadySeated => "Party already seated",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::InvalidTableName => "Invalid table_name",
            ErrorCode::InvalidCapacity => "Invalid capacity",
            ErrorCode::CapacityExceeded => "Party exceeds table capacity",
            ErrorCode::TableOccupied => "Table is already occupied",
            ErrorCode::TableNotOccupied => "Table is not occupied",
            ErrorCode::MissingReservationId => "Missing reservation_id",
            ErrorCode::TableConflict => "Table was changed by another request",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            9 => Ok(ErrorCode::MethodNotAllowed),
            10 => Ok(ErrorCode::RequestTimeout),

            // Reservation
            4001 => Ok(ErrorCode::ReservationNotFound),
            4002 => Ok(ErrorCode::InvalidPartySize),
            4003 => Ok(ErrorCode::InvalidReservationDate),
            4004 => Ok(ErrorCode::ClosedDay),
            4005 => Ok(ErrorCode::OutsideBusinessHours),
            4006 => Ok(ErrorCode::IllegalInitialStatus),
            4007 => Ok(ErrorCode::ReservationFinished),
            4008 => Ok(ErrorCode::UnknownStatus),
            4009 => Ok(ErrorCode::AlreadySeated),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::InvalidTableName),
            7003 => Ok(ErrorCode::InvalidCapacity),
            7004 => Ok(ErrorCode::CapacityExceeded),
            7005 => Ok(ErrorCode::TableOccupied),
            7006 => Ok(ErrorCode::TableNotOccupied),
            7007 => Ok(ErrorCode::MissingReservationId),
            7008 => Ok(ErrorCode::TableConflict),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
