//! Integration tests for payroll generation and listing.

mod common;

use assert_matches::assert_matches;
use common::{add_employee, test_ctx};
use rust_decimal_macros::dec;
use sqlx::PgPool;
use staffdesk_core::CoreError;
use staffdesk_db::models::PayrollFilter;
use staffdesk_service::{payroll, ServiceError};

// ---------------------------------------------------------------------------
// Per-employee generation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn breakdown_for_one_thousand(pool: PgPool) {
    let (ctx, _) = test_ctx(pool);
    let employee = add_employee(&ctx, "Jane", "jane@example.com").await;

    let entry =
        payroll::generate_for_employee(&ctx, &employee.id.to_string(), "2026-08", "1000.00")
            .await
            .unwrap();

    assert_eq!(entry.allowances, dec!(100.00));
    assert_eq!(entry.deductions, dec!(50.00));
    assert_eq!(entry.gross_pay, dec!(1100.00));
    assert_eq!(entry.net_pay, dec!(1050.00));
    assert_eq!(entry.year_month, "2026-08");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn regeneration_overwrites_in_place(pool: PgPool) {
    let (ctx, _) = test_ctx(pool.clone());
    let employee = add_employee(&ctx, "Jane", "jane@example.com").await;
    let id = employee.id.to_string();

    payroll::generate_for_employee(&ctx, &id, "2026-08", "1000")
        .await
        .unwrap();
    let second = payroll::generate_for_employee(&ctx, &id, "2026-08", "2000")
        .await
        .unwrap();

    assert_eq!(second.net_pay, dec!(2100.00));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payroll")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let rows = payroll::list_payroll(&ctx, &PayrollFilter::default())
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].net_pay, dec!(2100.00));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_year_month_is_rejected(pool: PgPool) {
    let (ctx, _) = test_ctx(pool);
    let employee = add_employee(&ctx, "Jane", "jane@example.com").await;
    let id = employee.id.to_string();

    for bad in ["2026-8", "202608", "2026/08", "2026-13"] {
        let err = payroll::generate_for_employee(&ctx, &id, bad, "1000")
            .await
            .unwrap_err();
        assert_matches!(err, ServiceError::Core(CoreError::Validation(_)));
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn negative_salary_is_rejected(pool: PgPool) {
    let (ctx, _) = test_ctx(pool);
    let employee = add_employee(&ctx, "Jane", "jane@example.com").await;

    let err = payroll::generate_for_employee(&ctx, &employee.id.to_string(), "2026-08", "-5")
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::Core(CoreError::Validation(_)));
}

// ---------------------------------------------------------------------------
// Month-wide generation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn month_run_over_zero_active_employees_succeeds_trivially(pool: PgPool) {
    let (ctx, notifier) = test_ctx(pool.clone());

    let run = payroll::generate_for_month(&ctx, "2026-08").await.unwrap();
    assert!(run.is_complete());
    assert_eq!(run.attempted, 0);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payroll")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
    assert_eq!(notifier.titles(), vec!["Success"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn month_run_covers_only_active_employees(pool: PgPool) {
    let (ctx, _) = test_ctx(pool.clone());

    let active = add_employee(&ctx, "Jane", "jane@example.com").await;
    let inactive = add_employee(&ctx, "John", "john@example.com").await;
    sqlx::query("UPDATE employees SET status = 'INACTIVE' WHERE id = $1")
        .bind(inactive.id)
        .execute(&pool)
        .await
        .unwrap();

    let run = payroll::generate_for_month(&ctx, "2026-08").await.unwrap();
    assert!(run.is_complete());
    assert_eq!(run.attempted, 1);

    let rows = payroll::list_payroll(&ctx, &PayrollFilter::default())
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].employee_id, active.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn month_run_with_one_failing_employee_reports_partial_success(pool: PgPool) {
    let (ctx, notifier) = test_ctx(pool.clone());

    let good = add_employee(&ctx, "Jane", "jane@example.com").await;

    // Force a bad ACTIVE row past the schema guard so the per-employee
    // computation fails while the rest of the run proceeds.
    sqlx::query("ALTER TABLE employees DROP CONSTRAINT ck_employees_salary_nonnegative")
        .execute(&pool)
        .await
        .unwrap();
    let (bad_id,): (i64,) = sqlx::query_as(
        "INSERT INTO employees (first_name, base_salary) VALUES ('Broken', -100) RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let run = payroll::generate_for_month(&ctx, "2026-08").await.unwrap();
    assert!(!run.is_complete());
    assert_eq!(run.attempted, 2);
    assert_eq!(run.failures.len(), 1);
    assert_eq!(run.failures[0].0, bad_id);

    // The healthy employee's row was still written and stays in place.
    let rows = payroll::list_payroll(&ctx, &PayrollFilter::default())
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].employee_id, good.id);

    assert!(notifier.titles().contains(&"Partial Success".to_string()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn month_run_is_idempotent(pool: PgPool) {
    let (ctx, _) = test_ctx(pool.clone());

    add_employee(&ctx, "Jane", "jane@example.com").await;
    add_employee(&ctx, "John", "john@example.com").await;

    payroll::generate_for_month(&ctx, "2026-08").await.unwrap();
    payroll::generate_for_month(&ctx, "2026-08").await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payroll")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_filters_by_employee_and_month(pool: PgPool) {
    let (ctx, _) = test_ctx(pool);

    let jane = add_employee(&ctx, "Jane", "jane@example.com").await;
    let john = add_employee(&ctx, "John", "john@example.com").await;

    for ym in ["2026-07", "2026-08"] {
        payroll::generate_for_month(&ctx, ym).await.unwrap();
    }

    let all = payroll::list_payroll(&ctx, &PayrollFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 4);
    // Newest period first, then employee id.
    assert_eq!(all[0].year_month, "2026-08");
    assert_eq!(all[0].employee_id, jane.id);

    let only_john = payroll::list_payroll(
        &ctx,
        &PayrollFilter {
            employee_id: Some(john.id),
            year_month: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(only_john.len(), 2);
    assert!(only_john.iter().all(|r| r.employee_id == john.id));

    let one_cell = payroll::list_payroll(
        &ctx,
        &PayrollFilter {
            employee_id: Some(jane.id),
            year_month: Some("2026-07".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(one_cell.len(), 1);
    assert_eq!(one_cell[0].first_name, "Jane");
}
