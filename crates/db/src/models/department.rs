use serde::Serialize;
use sqlx::FromRow;
use staffdesk_core::types::DbId;

/// A department row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub name: String,
}
