//! Attendance check-in/out state handling.
//!
//! State machine per (employee, day): no record -> checked in -> checked
//! out, with a direct status-set path that shares the same uniqueness key.
//! Check-in relies on the unique constraint itself: the insert either
//! lands or reports "already checked in", with no window in between.

use chrono::{Local, NaiveDate, Utc};
use staffdesk_core::types::DbId;
use staffdesk_core::{validation, CoreError};
use staffdesk_db::models::{AttendanceDay, AttendanceStatus};
use staffdesk_db::repositories::AttendanceRepo;

use crate::error::{is_fk_violation, notify_failure, ServiceResult};
use crate::state::AppContext;

/// The attendance day for "now": the server's local calendar date.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Mark an in-time for the given employee, today, captured at call time.
///
/// Fails when the employee does not exist or an entry for today already
/// exists (checked in, checked out, or status-set).
pub async fn check_in(ctx: &AppContext, employee_id_raw: &str) -> ServiceResult<()> {
    let result = async {
        let employee_id = validation::parse_id(employee_id_raw, "Employee ID")?;
        let now = Utc::now();

        let inserted = AttendanceRepo::try_check_in(&ctx.pool, employee_id, today(), now)
            .await
            .map_err(|err| -> crate::error::ServiceError {
                if is_fk_violation(&err) {
                    CoreError::NotFound {
                        entity: "Employee",
                        id: employee_id,
                    }
                    .into()
                } else {
                    err.into()
                }
            })?;
        if !inserted {
            return Err(CoreError::Conflict(
                "Attendance entry for today already exists".to_string(),
            )
            .into());
        }

        ctx.notifier.info(
            "Success",
            &format!("In-Time marked at {}", now.with_timezone(&Local).format("%H:%M:%S")),
        );
        Ok(())
    }
    .await;
    result.inspect_err(|err| notify_failure(ctx.notifier.as_ref(), err))
}

/// Mark an out-time for the given employee, today, captured at call time.
///
/// Fails when no in-time exists for today or the out-time is already set.
pub async fn check_out(ctx: &AppContext, employee_id_raw: &str) -> ServiceResult<()> {
    let result = async {
        let employee_id = validation::parse_id(employee_id_raw, "Employee ID")?;
        let now = Utc::now();
        let day = today();

        if AttendanceRepo::try_check_out(&ctx.pool, employee_id, day, now).await? {
            ctx.notifier.info(
                "Success",
                &format!("Out-Time marked at {}", now.with_timezone(&Local).format("%H:%M:%S")),
            );
            return Ok(());
        }

        // The guarded update matched nothing; read the row to say why.
        let message = match AttendanceRepo::find_day(&ctx.pool, employee_id, day).await? {
            Some(row) if row.out_time.is_some() => "Out-Time already marked for today",
            _ => "No In-Time found for today",
        };
        Err(CoreError::Conflict(message.to_string()).into())
    }
    .await;
    result.inspect_err(|err| notify_failure(ctx.notifier.as_ref(), err))
}

/// Set the day status for an explicit date, leaving any in/out timestamps
/// untouched. Creates the row if none exists for that day.
pub async fn set_status(
    ctx: &AppContext,
    employee_id: DbId,
    date: NaiveDate,
    status: AttendanceStatus,
) -> ServiceResult<AttendanceDay> {
    let result = async {
        if employee_id <= 0 {
            return Err(CoreError::validation("Employee ID must be positive").into());
        }
        AttendanceRepo::set_status(&ctx.pool, employee_id, date, status)
            .await
            .map_err(|err| -> crate::error::ServiceError {
                if is_fk_violation(&err) {
                    CoreError::NotFound {
                        entity: "Employee",
                        id: employee_id,
                    }
                    .into()
                } else {
                    err.into()
                }
            })
    }
    .await;
    result.inspect_err(|err| notify_failure(ctx.notifier.as_ref(), err))
}

/// The attendance sheet for one day, ordered by employee id.
pub async fn day_sheet(ctx: &AppContext, date: NaiveDate) -> ServiceResult<Vec<AttendanceDay>> {
    let result = AttendanceRepo::list_for_day(&ctx.pool, date)
        .await
        .map_err(Into::into);
    result.inspect_err(|err| notify_failure(ctx.notifier.as_ref(), err))
}

/// The full attendance history, newest day first, then employee id.
pub async fn history(ctx: &AppContext) -> ServiceResult<Vec<AttendanceDay>> {
    let result = AttendanceRepo::list_all(&ctx.pool).await.map_err(Into::into);
    result.inspect_err(|err| notify_failure(ctx.notifier.as_ref(), err))
}
