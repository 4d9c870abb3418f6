//! Attendance entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffdesk_core::types::{DbId, Timestamp};

/// Day status stored in the `attendance.status` TEXT column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
}

/// An attendance row: at most one per (employee, work_date).
///
/// `in_time`/`out_time` are set by the check-in/out path and left untouched
/// by the direct status-set path; a status-only row has neither.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceDay {
    pub id: DbId,
    pub employee_id: DbId,
    pub work_date: NaiveDate,
    pub in_time: Option<Timestamp>,
    pub out_time: Option<Timestamp>,
    pub status: AttendanceStatus,
}
