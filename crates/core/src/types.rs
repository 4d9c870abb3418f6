/// Row identifier shared by all four tables (BIGSERIAL in the schema).
pub type DbId = i64;

/// Point-in-time values (hire dates, check-in/out, payroll generation)
/// are stored and handled in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
