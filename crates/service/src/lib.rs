//! The operations the presentation layer calls.
//!
//! Every function here takes an [`AppContext`] (pool + notifier) built once
//! by the embedding application, performs validation before touching the
//! database, and reports outcomes both as a returned `Result` and through
//! the [`Notifier`] capability so form-based callers can display them
//! without interpreting error values.

pub mod attendance;
pub mod employees;
pub mod error;
pub mod notifier;
pub mod payroll;
pub mod state;

pub use error::{ServiceError, ServiceResult};
pub use notifier::{LogNotifier, Notifier};
pub use state::AppContext;
