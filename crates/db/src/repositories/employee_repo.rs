//! Repository for the `employees` table.

use rust_decimal::Decimal;
use sqlx::PgPool;
use staffdesk_core::types::DbId;

use crate::models::employee::{Employee, EmployeeListing, NewEmployee};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, first_name, last_name, email, phone, hire_date, \
    job_title, department_id, base_salary, status";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    ///
    /// Status defaults to ACTIVE and `hire_date` to now via the schema.
    pub async fn insert(pool: &PgPool, input: &NewEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees \
                 (first_name, last_name, email, phone, job_title, department_id, base_salary) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.job_title)
            .bind(input.department_id)
            .bind(input.base_salary)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace every editable field of an employee.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET \
                 first_name = $2, last_name = $3, email = $4, phone = $5, \
                 job_title = $6, department_id = $7, base_salary = $8 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.job_title)
            .bind(input.department_id)
            .bind(input.base_salary)
            .fetch_optional(pool)
            .await
    }

    /// Delete an employee by id. Returns `true` if a row was removed.
    ///
    /// Attendance and payroll rows go with it via `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List all employees joined with their department name, ordered by id
    /// ascending. Unassigned employees get an empty department name.
    pub async fn list_with_department(pool: &PgPool) -> Result<Vec<EmployeeListing>, sqlx::Error> {
        sqlx::query_as::<_, EmployeeListing>(
            "SELECT e.id, e.first_name, e.last_name, e.email, e.phone, e.job_title, \
                    COALESCE(d.name, '') AS department_name, e.base_salary \
             FROM employees e \
             LEFT JOIN departments d ON e.department_id = d.id \
             ORDER BY e.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Load (id, base_salary) for every ACTIVE employee, ordered by id.
    ///
    /// Input to month-wide payroll generation.
    pub async fn active_salaries(pool: &PgPool) -> Result<Vec<(DbId, Decimal)>, sqlx::Error> {
        sqlx::query_as::<_, (DbId, Decimal)>(
            "SELECT id, base_salary FROM employees WHERE status = 'ACTIVE' ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }
}
