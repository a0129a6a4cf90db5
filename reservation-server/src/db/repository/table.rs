//! Dining Table Repository
//!
//! Seat and unassign write the table row and the reservation row in one
//! transaction; the table row is only touched while it is still in the
//! state the caller checked.

use super::reservation::set_status;
use super::{RepoError, RepoResult};
use shared::models::{DiningTable, Reservation, ReservationStatus};
use shared::util::now_millis;
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "table_id, table_name, capacity, reservation_id, occupied, created_at, updated_at";

/// All tables ordered by name
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<DiningTable>> {
    let tables = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM tables ORDER BY table_name, table_id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(tables)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM tables WHERE table_id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(table)
}

/// Insert a table, optionally already seating `bound`
pub async fn create(
    pool: &SqlitePool,
    table_name: &str,
    capacity: i32,
    bound: Option<&Reservation>,
) -> RepoResult<DiningTable> {
    let now = now_millis();
    let mut tx = pool.begin().await?;

    let table = sqlx::query_as::<_, DiningTable>(&format!(
        "INSERT INTO tables (table_name, capacity, reservation_id, occupied, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(table_name)
    .bind(capacity)
    .bind(bound.map(|r| r.reservation_id))
    .bind(bound.is_some())
    .bind(now)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    if let Some(reservation) = bound {
        set_status(
            &mut *tx,
            reservation.reservation_id,
            reservation.status,
            ReservationStatus::Seated,
            now,
        )
        .await?;
    }

    tx.commit().await?;
    Ok(table)
}

/// Bind `reservation` to a free table and mark it seated
pub async fn seat(pool: &SqlitePool, table_id: i64, reservation: &Reservation) -> RepoResult<DiningTable> {
    let now = now_millis();
    let mut tx = pool.begin().await?;

    let table = sqlx::query_as::<_, DiningTable>(&format!(
        "UPDATE tables SET reservation_id = ?, occupied = 1, updated_at = ? \
         WHERE table_id = ? AND occupied = 0 RETURNING {COLUMNS}"
    ))
    .bind(reservation.reservation_id)
    .bind(now)
    .bind(table_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| RepoError::Conflict(format!("Table {table_id} is no longer free")))?;

    set_status(
        &mut *tx,
        reservation.reservation_id,
        reservation.status,
        ReservationStatus::Seated,
        now,
    )
    .await?;

    tx.commit().await?;
    Ok(table)
}

/// Free a table and mark the reservation it held finished
pub async fn unassign(pool: &SqlitePool, table_id: i64, reservation: &Reservation) -> RepoResult<DiningTable> {
    let now = now_millis();
    let mut tx = pool.begin().await?;

    let table = sqlx::query_as::<_, DiningTable>(&format!(
        "UPDATE tables SET reservation_id = NULL, occupied = 0, updated_at = ? \
         WHERE table_id = ? AND reservation_id = ? RETURNING {COLUMNS}"
    ))
    .bind(now)
    .bind(table_id)
    .bind(reservation.reservation_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| {
        RepoError::Conflict(format!(
            "Table {table_id} no longer holds reservation {}",
            reservation.reservation_id
        ))
    })?;

    set_status(
        &mut *tx,
        reservation.reservation_id,
        reservation.status,
        ReservationStatus::Finished,
        now,
    )
    .await?;

    tx.commit().await?;
    Ok(table)
}

/// Free whichever table holds `reservation_id` (if any)
pub(super) async fn release_by_reservation(
    conn: &mut SqliteConnection,
    reservation_id: i64,
    now: i64,
) -> RepoResult<u64> {
    let rows = sqlx::query(
        "UPDATE tables SET reservation_id = NULL, occupied = 0, updated_at = ? WHERE reservation_id = ?",
    )
    .bind(now)
    .bind(reservation_id)
    .execute(&mut *conn)
    .await?;
    Ok(rows.rows_affected())
}
