//! Payroll computation with idempotent recalculation.

use rust_decimal::Decimal;
use staffdesk_core::payroll::{self, YearMonth};
use staffdesk_core::types::DbId;
use staffdesk_core::validation;
use staffdesk_db::models::{PayrollEntry, PayrollFilter, PayrollListing};
use staffdesk_db::repositories::{EmployeeRepo, PayrollRepo};

use crate::error::{notify_failure, ServiceError, ServiceResult};
use crate::state::AppContext;

/// Outcome of a month-wide payroll run.
///
/// Each employee's upsert commits independently, so a run that fails
/// partway leaves the already-applied rows in place; the failures are
/// reported per employee instead of collapsing the run into one error.
#[derive(Debug)]
pub struct PayrollRun {
    pub year_month: YearMonth,
    /// Number of ACTIVE employees the run attempted.
    pub attempted: usize,
    /// Employees whose upsert failed, with the reason.
    pub failures: Vec<(DbId, ServiceError)>,
}

impl PayrollRun {
    /// True when every attempted upsert succeeded (trivially true for an
    /// empty ACTIVE set).
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Compute and upsert one employee's payroll row for a period.
async fn upsert_for_employee(
    ctx: &AppContext,
    employee_id: DbId,
    year_month: &YearMonth,
    base_salary: Decimal,
) -> ServiceResult<PayrollEntry> {
    let pay = payroll::compute(base_salary)?;
    let entry = PayrollRepo::upsert(&ctx.pool, employee_id, year_month.as_str(), &pay).await?;
    Ok(entry)
}

/// Generate (or regenerate) payroll for one employee and period from raw
/// form fields. Overwrites any existing row for the same key.
pub async fn generate_for_employee(
    ctx: &AppContext,
    employee_id_raw: &str,
    year_month_raw: &str,
    base_salary_raw: &str,
) -> ServiceResult<PayrollEntry> {
    let result = async {
        let employee_id = validation::parse_id(employee_id_raw, "Employee ID")?;
        let year_month: YearMonth = year_month_raw.parse()?;
        let base_salary = validation::parse_salary(base_salary_raw)?;
        upsert_for_employee(ctx, employee_id, &year_month, base_salary).await
    }
    .await;
    result.inspect_err(|err| notify_failure(ctx.notifier.as_ref(), err))
}

/// Generate payroll for every ACTIVE employee for a period.
///
/// Not transactional as a whole: each upsert commits on its own, and a
/// failure for one employee does not undo the others. The returned
/// [`PayrollRun`] distinguishes complete from partial success.
pub async fn generate_for_month(ctx: &AppContext, year_month_raw: &str) -> ServiceResult<PayrollRun> {
    let result = async {
        let year_month: YearMonth = year_month_raw.parse()?;
        let salaries = EmployeeRepo::active_salaries(&ctx.pool).await?;

        let attempted = salaries.len();
        let mut failures = Vec::new();
        for (employee_id, base_salary) in salaries {
            if let Err(err) = upsert_for_employee(ctx, employee_id, &year_month, base_salary).await
            {
                tracing::warn!(employee_id, error = %err, "payroll upsert failed");
                failures.push((employee_id, err));
            }
        }

        let run = PayrollRun {
            year_month,
            attempted,
            failures,
        };
        if run.is_complete() {
            ctx.notifier.info(
                "Success",
                "Payroll generated successfully for all active employees",
            );
        } else {
            ctx.notifier.warning(
                "Partial Success",
                &format!(
                    "Payroll generation completed, but {} of {} employees failed",
                    run.failures.len(),
                    run.attempted
                ),
            );
        }
        Ok(run)
    }
    .await;
    result.inspect_err(|err| notify_failure(ctx.notifier.as_ref(), err))
}

/// List payroll rows with employee names, optionally filtered by employee
/// and/or period, newest period first.
pub async fn list_payroll(
    ctx: &AppContext,
    filter: &PayrollFilter,
) -> ServiceResult<Vec<PayrollListing>> {
    let result = PayrollRepo::list(&ctx.pool, filter).await.map_err(Into::into);
    result.inspect_err(|err| notify_failure(ctx.notifier.as_ref(), err))
}
