//! Repository for the `departments` table.

use sqlx::PgPool;
use staffdesk_core::types::DbId;

use crate::models::department::Department;

/// Provides lookups on the seeded department set.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// List all departments ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        sqlx::query_as::<_, Department>("SELECT id, name FROM departments ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Look up a department id by exact name match.
    pub async fn find_id_by_name(pool: &PgPool, name: &str) -> Result<Option<DbId>, sqlx::Error> {
        let id = sqlx::query_scalar::<_, DbId>("SELECT id FROM departments WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await?;
        Ok(id)
    }
}
