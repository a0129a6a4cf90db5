//! Reservation Repository

use super::{RepoError, RepoResult};
use shared::models::{Reservation, ReservationDetails, ReservationStatus};
use shared::util::{digits_only, now_millis};
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "reservation_id, first_name, last_name, mobile_number, reservation_date, \
                       reservation_time, people, status, created_at, updated_at";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Reservation>> {
    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservations WHERE reservation_id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(reservation)
}

/// Reservations on `date` that are not finished, earliest first
pub async fn find_by_date(pool: &SqlitePool, date: &str) -> RepoResult<Vec<Reservation>> {
    let reservations = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservations \
         WHERE reservation_date = ? AND status != 'finished' \
         ORDER BY reservation_time, reservation_id"
    ))
    .bind(date)
    .fetch_all(pool)
    .await?;
    Ok(reservations)
}

/// Digit-wise substring match on the mobile number, by date then time
pub async fn search_by_phone(pool: &SqlitePool, mobile_number: &str) -> RepoResult<Vec<Reservation>> {
    let pattern = format!("%{}%", digits_only(mobile_number));
    let reservations = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservations \
         WHERE mobile_digits LIKE ? \
         ORDER BY reservation_date, reservation_time, reservation_id"
    ))
    .bind(pattern)
    .fetch_all(pool)
    .await?;
    Ok(reservations)
}

/// Insert a new reservation; status always starts as `booked`
pub async fn create(pool: &SqlitePool, data: &ReservationDetails) -> RepoResult<Reservation> {
    let now = now_millis();
    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "INSERT INTO reservations \
         (first_name, last_name, mobile_number, mobile_digits, reservation_date, \
          reservation_time, people, status, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.mobile_number)
    .bind(digits_only(&data.mobile_number))
    .bind(&data.reservation_date)
    .bind(&data.reservation_time)
    .bind(data.people)
    .bind(ReservationStatus::Booked)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(reservation)
}

/// Replace the reservation details; status is left as is
pub async fn update(pool: &SqlitePool, id: i64, data: &ReservationDetails) -> RepoResult<Reservation> {
    sqlx::query_as::<_, Reservation>(&format!(
        "UPDATE reservations SET first_name = ?, last_name = ?, mobile_number = ?, \
         mobile_digits = ?, reservation_date = ?, reservation_time = ?, people = ?, \
         updated_at = ? WHERE reservation_id = ? RETURNING {COLUMNS}"
    ))
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.mobile_number)
    .bind(digits_only(&data.mobile_number))
    .bind(&data.reservation_date)
    .bind(&data.reservation_time)
    .bind(data.people)
    .bind(now_millis())
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Reservation {id}")))
}

/// Move a reservation from `prior` to `next`
///
/// Leaving `seated` releases the table holding the reservation in the same
/// transaction.
pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    prior: ReservationStatus,
    next: ReservationStatus,
) -> RepoResult<ReservationStatus> {
    let now = now_millis();
    let mut tx = pool.begin().await?;

    set_status(&mut *tx, id, prior, next, now).await?;
    if prior == ReservationStatus::Seated && next != ReservationStatus::Seated {
        super::table::release_by_reservation(&mut *tx, id, now).await?;
    }

    tx.commit().await?;
    Ok(next)
}

/// Guarded status write: only applies while the row still holds `prior`
pub(super) async fn set_status(
    conn: &mut SqliteConnection,
    id: i64,
    prior: ReservationStatus,
    next: ReservationStatus,
    now: i64,
) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE reservations SET status = ?, updated_at = ? WHERE reservation_id = ? AND status = ?",
    )
    .bind(next)
    .bind(now)
    .bind(id)
    .bind(prior)
    .execute(&mut *conn)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::Conflict(format!(
            "Reservation {id} is no longer {prior}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn details(phone: &str, date: &str, time: &str) -> ReservationDetails {
        ReservationDetails {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            mobile_number: phone.into(),
            reservation_date: date.into(),
            reservation_time: time.into(),
            people: 4,
        }
    }

    async fn pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = pool().await;
        let created = create(&pool, &details("555-123-4567", "2030-06-12", "18:00"))
            .await
            .unwrap();
        assert_eq!(created.status, ReservationStatus::Booked);
        assert!(created.reservation_id > 0);

        let found = find_by_id(&pool, created.reservation_id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert!(find_by_id(&pool, 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_date_excludes_finished_and_sorts_by_time() {
        let pool = pool().await;
        let late = create(&pool, &details("1", "2030-06-12", "20:00")).await.unwrap();
        let early = create(&pool, &details("2", "2030-06-12", "11:00")).await.unwrap();
        let done = create(&pool, &details("3", "2030-06-12", "12:00")).await.unwrap();
        create(&pool, &details("4", "2030-06-13", "12:00")).await.unwrap();

        update_status(&pool, done.reservation_id, ReservationStatus::Booked, ReservationStatus::Finished)
            .await
            .unwrap();

        let ids: Vec<i64> = find_by_date(&pool, "2030-06-12")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.reservation_id)
            .collect();
        assert_eq!(ids, vec![early.reservation_id, late.reservation_id]);
    }

    #[tokio::test]
    async fn test_search_by_phone_ignores_punctuation() {
        let pool = pool().await;
        let second = create(&pool, &details("(555) 123-4567", "2030-06-13", "18:00")).await.unwrap();
        let first = create(&pool, &details("555.123.4567", "2030-06-12", "18:00")).await.unwrap();
        create(&pool, &details("800-000-0000", "2030-06-12", "18:00")).await.unwrap();

        let ids: Vec<i64> = search_by_phone(&pool, "5551234567")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.reservation_id)
            .collect();
        assert_eq!(ids, vec![first.reservation_id, second.reservation_id]);

        let partial = search_by_phone(&pool, "123-45").await.unwrap();
        assert_eq!(partial.len(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_status() {
        let pool = pool().await;
        let r = create(&pool, &details("1", "2030-06-12", "18:00")).await.unwrap();
        update_status(&pool, r.reservation_id, ReservationStatus::Booked, ReservationStatus::Cancelled)
            .await
            .unwrap();

        let mut changed = details("(999) 000-1111", "2030-06-13", "19:15");
        changed.people = 2;
        let updated = update(&pool, r.reservation_id, &changed).await.unwrap();
        assert_eq!(updated.status, ReservationStatus::Cancelled);
        assert_eq!(updated.people, 2);
        assert_eq!(updated.reservation_time, "19:15");
        assert_eq!(search_by_phone(&pool, "9990001111").await.unwrap().len(), 1);

        let err = update(&pool, 999, &changed).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_status_guard() {
        let pool = pool().await;
        let r = create(&pool, &details("1", "2030-06-12", "18:00")).await.unwrap();

        // stale prior status: nothing is written
        let err = update_status(&pool, r.reservation_id, ReservationStatus::Seated, ReservationStatus::Finished)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Conflict(_)));
        let still = find_by_id(&pool, r.reservation_id).await.unwrap().unwrap();
        assert_eq!(still.status, ReservationStatus::Booked);
    }
}
