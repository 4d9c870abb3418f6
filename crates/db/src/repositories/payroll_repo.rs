//! Repository for the `payroll` table.

use sqlx::PgPool;
use staffdesk_core::payroll::PayBreakdown;
use staffdesk_core::types::DbId;

use crate::models::payroll::{PayrollEntry, PayrollFilter, PayrollListing};

/// Column list shared across queries.
const COLUMNS: &str = "\
    id, employee_id, year_month, gross_pay, allowances, deductions, \
    net_pay, generated_on";

/// Provides the idempotent payroll upsert and the joined listing.
pub struct PayrollRepo;

impl PayrollRepo {
    /// Insert or overwrite the row for (employee_id, year_month).
    ///
    /// `generated_on` is refreshed on every recompute, including a pure
    /// overwrite with identical amounts.
    pub async fn upsert(
        pool: &PgPool,
        employee_id: DbId,
        year_month: &str,
        pay: &PayBreakdown,
    ) -> Result<PayrollEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO payroll \
                 (employee_id, year_month, gross_pay, allowances, deductions, net_pay) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (employee_id, year_month) DO UPDATE SET \
                 gross_pay    = EXCLUDED.gross_pay, \
                 allowances   = EXCLUDED.allowances, \
                 deductions   = EXCLUDED.deductions, \
                 net_pay      = EXCLUDED.net_pay, \
                 generated_on = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PayrollEntry>(&query)
            .bind(employee_id)
            .bind(year_month)
            .bind(pay.gross_pay)
            .bind(pay.allowances)
            .bind(pay.deductions)
            .bind(pay.net_pay)
            .fetch_one(pool)
            .await
    }

    /// List payroll rows joined with employee names, newest period first,
    /// then employee id. Both filters are optional.
    pub async fn list(
        pool: &PgPool,
        filter: &PayrollFilter,
    ) -> Result<Vec<PayrollListing>, sqlx::Error> {
        sqlx::query_as::<_, PayrollListing>(
            "SELECT p.id, p.employee_id, e.first_name, e.last_name, p.year_month, \
                    p.gross_pay, p.allowances, p.deductions, p.net_pay \
             FROM payroll p \
             JOIN employees e ON p.employee_id = e.id \
             WHERE ($1::BIGINT IS NULL OR p.employee_id = $1) \
               AND ($2::VARCHAR IS NULL OR p.year_month = $2) \
             ORDER BY p.year_month DESC, p.employee_id",
        )
        .bind(filter.employee_id)
        .bind(&filter.year_month)
        .fetch_all(pool)
        .await
    }

    /// Fetch the row for one employee and period, if any.
    pub async fn find_for_month(
        pool: &PgPool,
        employee_id: DbId,
        year_month: &str,
    ) -> Result<Option<PayrollEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payroll WHERE employee_id = $1 AND year_month = $2"
        );
        sqlx::query_as::<_, PayrollEntry>(&query)
            .bind(employee_id)
            .bind(year_month)
            .fetch_optional(pool)
            .await
    }
}
