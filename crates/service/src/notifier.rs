//! Outcome notification capability.
//!
//! The desktop layer supplies a dialog-based implementation; headless
//! callers use [`LogNotifier`]. Services report user-facing outcomes here
//! (a marked check-in, a partial payroll run, a validation failure) in
//! addition to their returned `Result`, so the form layer never has to
//! translate error values into display text itself.

/// Receives user-facing outcome messages from service operations.
pub trait Notifier: Send + Sync {
    fn info(&self, title: &str, message: &str);
    fn warning(&self, title: &str, message: &str);
    fn error(&self, title: &str, message: &str);
}

/// Tracing-backed notifier for headless callers.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn info(&self, title: &str, message: &str) {
        tracing::info!(title, "{message}");
    }

    fn warning(&self, title: &str, message: &str) {
        tracing::warn!(title, "{message}");
    }

    fn error(&self, title: &str, message: &str) {
        tracing::error!(title, "{message}");
    }
}
