//! Repository for the `attendance` table.
//!
//! The `(employee_id, work_date)` uniqueness constraint is the source of
//! truth for "already checked in": check-in is a single
//! `INSERT .. ON CONFLICT DO NOTHING` rather than a check-then-insert
//! sequence, so concurrent check-ins cannot race past each other.

use chrono::NaiveDate;
use sqlx::PgPool;
use staffdesk_core::types::{DbId, Timestamp};

use crate::models::attendance::{AttendanceDay, AttendanceStatus};

/// Column list shared across queries.
const COLUMNS: &str = "id, employee_id, work_date, in_time, out_time, status";

/// Provides per-employee-per-day attendance state transitions.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Record a check-in for the given day.
    ///
    /// Returns `false` if a row for that employee and day already exists
    /// (whatever its state). A nonexistent employee surfaces as a
    /// foreign-key violation.
    pub async fn try_check_in(
        pool: &PgPool,
        employee_id: DbId,
        work_date: NaiveDate,
        in_time: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO attendance (employee_id, work_date, in_time, status) \
             VALUES ($1, $2, $3, 'PRESENT') \
             ON CONFLICT (employee_id, work_date) DO NOTHING",
        )
        .bind(employee_id)
        .bind(work_date)
        .bind(in_time)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the check-out time for the given day.
    ///
    /// Guarded: only applies where a check-in exists and no check-out has
    /// been recorded yet. Returns `false` when the guard matched no row;
    /// [`Self::find_day`] disambiguates why.
    pub async fn try_check_out(
        pool: &PgPool,
        employee_id: DbId,
        work_date: NaiveDate,
        out_time: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE attendance SET out_time = $3 \
             WHERE employee_id = $1 AND work_date = $2 \
               AND in_time IS NOT NULL AND out_time IS NULL",
        )
        .bind(employee_id)
        .bind(work_date)
        .bind(out_time)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Upsert the day status for an explicit date without touching the
    /// in/out timestamps.
    pub async fn set_status(
        pool: &PgPool,
        employee_id: DbId,
        work_date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<AttendanceDay, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance (employee_id, work_date, status) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (employee_id, work_date) DO UPDATE SET \
                 status = EXCLUDED.status \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceDay>(&query)
            .bind(employee_id)
            .bind(work_date)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// Fetch the row for one employee and day, if any.
    pub async fn find_day(
        pool: &PgPool,
        employee_id: DbId,
        work_date: NaiveDate,
    ) -> Result<Option<AttendanceDay>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM attendance WHERE employee_id = $1 AND work_date = $2");
        sqlx::query_as::<_, AttendanceDay>(&query)
            .bind(employee_id)
            .bind(work_date)
            .fetch_optional(pool)
            .await
    }

    /// List every attendance row for one day, ordered by employee id.
    pub async fn list_for_day(
        pool: &PgPool,
        work_date: NaiveDate,
    ) -> Result<Vec<AttendanceDay>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendance WHERE work_date = $1 ORDER BY employee_id"
        );
        sqlx::query_as::<_, AttendanceDay>(&query)
            .bind(work_date)
            .fetch_all(pool)
            .await
    }

    /// List the full attendance history, newest day first, then employee
    /// id. Feed for the presentation layer's attendance table.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<AttendanceDay>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM attendance ORDER BY work_date DESC, employee_id");
        sqlx::query_as::<_, AttendanceDay>(&query)
            .fetch_all(pool)
            .await
    }
}
