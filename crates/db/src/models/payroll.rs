//! Payroll entity model and listing DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffdesk_core::types::{DbId, Timestamp};

/// A payroll row: at most one per (employee, year_month). Recomputation
/// overwrites the amounts and refreshes `generated_on` in place.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PayrollEntry {
    pub id: DbId,
    pub employee_id: DbId,
    pub year_month: String,
    pub gross_pay: Decimal,
    pub allowances: Decimal,
    pub deductions: Decimal,
    pub net_pay: Decimal,
    pub generated_on: Timestamp,
}

/// One row of the employee-joined payroll listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PayrollListing {
    pub id: DbId,
    pub employee_id: DbId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub year_month: String,
    pub gross_pay: Decimal,
    pub allowances: Decimal,
    pub deductions: Decimal,
    pub net_pay: Decimal,
}

/// Optional filters for the payroll listing. Default is everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayrollFilter {
    pub employee_id: Option<DbId>,
    pub year_month: Option<String>,
}
