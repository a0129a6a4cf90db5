//! Reservation Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// Reservation lifecycle status (预订状态)
///
/// `booked → seated → finished`, or `→ cancelled`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ReservationStatus {
    #[default]
    Booked,
    Seated,
    Finished,
    Cancelled,
}

impl ReservationStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "booked",
            Self::Seated => "seated",
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "booked" => Ok(Self::Booked),
            "seated" => Ok(Self::Seated),
            "finished" => Ok(Self::Finished),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(AppError::with_message(
                ErrorCode::UnknownStatus,
                format!("unknown status: {other}"),
            )),
        }
    }
}

/// Reservation entity (预订)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub reservation_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    /// `YYYY-MM-DD`
    pub reservation_date: String,
    /// `HH:MM`, facility-local
    pub reservation_time: String,
    pub people: i32,
    pub status: ReservationStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create / full-update reservation payload
///
/// Every field is optional so absence is reported by the rules with a
/// field name instead of failing JSON decoding. `people` stays a raw
/// JSON value so `"4"` or `2.5` surface as an invalid party size.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile_number: Option<String>,
    pub reservation_date: Option<String>,
    pub reservation_time: Option<String>,
    pub people: Option<serde_json::Value>,
    pub status: Option<String>,
}

/// Reservation details after validation, in canonical form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDetails {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: String,
    pub reservation_time: String,
    pub people: i32,
}

/// `PUT /reservations/:id/status` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: Option<String>,
}

/// `PUT /reservations/:id/status` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    pub status: ReservationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&ReservationStatus::Seated).unwrap();
        assert_eq!(json, "\"seated\"");

        let status: ReservationStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, ReservationStatus::Cancelled);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "finished".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Finished
        );
        let err = "Seated".parse::<ReservationStatus>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownStatus);
    }

    #[test]
    fn test_draft_accepts_loose_people() {
        let draft: ReservationDraft =
            serde_json::from_str(r#"{"first_name":"Ann","people":"four"}"#).unwrap();
        assert_eq!(draft.first_name.as_deref(), Some("Ann"));
        assert_eq!(draft.people, Some(serde_json::json!("four")));
        assert!(draft.reservation_date.is_none());
    }
}
