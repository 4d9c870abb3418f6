//! Service-level error type and sqlx error classification.

use staffdesk_core::CoreError;

use crate::notifier::Notifier;

/// Error type for service operations.
///
/// Wraps [`CoreError`] for domain errors; database errors are classified
/// into domain errors where the cause is a known constraint, and kept as
/// [`ServiceError::Database`] otherwise. Errors are never fatal to the
/// embedding process, only to the individual operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A domain-level error from `staffdesk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An unclassified database error from sqlx.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

/// Convenience type alias for service return values.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        classify_sqlx_error(err)
    }
}

/// Classify a sqlx error into a domain error where possible.
///
/// - Unique violations (SQLSTATE 23505) on our `uq_*` constraints become
///   [`CoreError::Conflict`] with a per-constraint message.
/// - Foreign-key violations (SQLSTATE 23503) become [`CoreError::Conflict`]
///   naming the missing reference.
/// - Everything else stays a [`ServiceError::Database`].
fn classify_sqlx_error(err: sqlx::Error) -> ServiceError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some("23505") => {
                let message = match db_err.constraint() {
                    Some("uq_employees_email") => {
                        "An employee with this email already exists".to_string()
                    }
                    Some("uq_attendance_employee_day") => {
                        "An attendance entry for this employee and day already exists".to_string()
                    }
                    Some("uq_payroll_employee_month") => {
                        "A payroll row for this employee and month already exists".to_string()
                    }
                    Some(constraint) => {
                        format!("Duplicate value violates unique constraint: {constraint}")
                    }
                    None => "Duplicate value violates a unique constraint".to_string(),
                };
                return ServiceError::Core(CoreError::Conflict(message));
            }
            Some("23503") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return ServiceError::Core(CoreError::Conflict(format!(
                    "Referenced row does not exist ({constraint})"
                )));
            }
            _ => {}
        }
    }
    ServiceError::Database(err)
}

/// True when the error is a foreign-key violation. Callers that know which
/// reference is involved use this to report a not-found outcome instead of
/// a generic conflict.
pub(crate) fn is_fk_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503")
    )
}

/// Report a failed operation through the notifier, with the title tier the
/// presentation layer expects for that class of failure.
pub(crate) fn notify_failure(notifier: &dyn Notifier, err: &ServiceError) {
    match err {
        ServiceError::Core(CoreError::Validation(msg)) => {
            notifier.error("Validation Error", msg);
        }
        ServiceError::Core(CoreError::Conflict(msg)) => {
            notifier.warning("Warning", msg);
        }
        ServiceError::Core(core) => {
            notifier.error("Error", &core.to_string());
        }
        ServiceError::Database(db) => {
            notifier.error("DB Error", &db.to_string());
        }
    }
}
