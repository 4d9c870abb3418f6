//! Employee entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffdesk_core::types::{DbId, Timestamp};

/// Employment status stored in the `employees.status` TEXT column.
///
/// Only `Active` employees are picked up by month-wide payroll generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Terminated,
}

/// An employee row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hire_date: Timestamp,
    pub job_title: Option<String>,
    pub department_id: Option<DbId>,
    pub base_salary: Decimal,
    pub status: EmployeeStatus,
}

/// Validated column values for inserting or fully replacing an employee.
///
/// Produced by the service layer after validation and department
/// resolution; both `add` and `update` write every field, matching the
/// form-based edit model of the presentation layer.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department_id: Option<DbId>,
    pub base_salary: Decimal,
}

/// One row of the department-joined employee listing.
///
/// `department_name` is the empty string for unassigned employees.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeListing {
    pub id: DbId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department_name: String,
    pub base_salary: Decimal,
}
