use std::sync::Arc;

use sqlx::PgPool;

use crate::notifier::{LogNotifier, Notifier};

/// Shared application state, constructed once by the embedding application
/// and passed by reference into every operation.
///
/// Holds nothing mutable beyond the connection pool; the services
/// themselves are plain functions.
#[derive(Clone)]
pub struct AppContext {
    pub pool: PgPool,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    pub fn new(pool: PgPool, notifier: Arc<dyn Notifier>) -> Self {
        Self { pool, notifier }
    }

    /// Context for callers without an interactive surface; outcomes go to
    /// the log.
    pub fn headless(pool: PgPool) -> Self {
        Self::new(pool, Arc::new(LogNotifier))
    }
}
