//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity (桌台)
///
/// `occupied` is true exactly when `reservation_id` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub table_id: i64,
    pub table_name: String,
    pub capacity: i32,
    pub reservation_id: Option<i64>,
    pub occupied: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create dining table payload
///
/// `capacity` and `reservation_id` stay raw JSON so the rules can tell a
/// missing value from a malformed one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableDraft {
    pub table_name: Option<String>,
    pub capacity: Option<serde_json::Value>,
    pub reservation_id: Option<serde_json::Value>,
}

/// Dining table after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiningTableCreate {
    pub table_name: String,
    pub capacity: i32,
    /// Bind the table to this reservation on creation
    pub reservation_id: Option<i64>,
}

/// `PUT /tables/:id/seat` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatRequest {
    pub reservation_id: Option<serde_json::Value>,
}
