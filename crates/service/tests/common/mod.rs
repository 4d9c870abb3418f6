//! Shared helpers for service integration tests.

// Each test binary compiles this module separately and uses a subset.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use sqlx::PgPool;
use staffdesk_core::department::DeptRef;
use staffdesk_db::models::Employee;
use staffdesk_service::employees::{self, EmployeeForm};
use staffdesk_service::{AppContext, Notifier};

/// Notifier that records every message so tests can assert on what the
/// presentation layer would have displayed.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(&'static str, String, String)>>,
}

impl RecordingNotifier {
    fn push(&self, level: &'static str, title: &str, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, title.to_string(), message.to_string()));
    }

    /// Titles of all recorded messages, in order.
    pub fn titles(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|(_, title, _)| title.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn info(&self, title: &str, message: &str) {
        self.push("info", title, message);
    }

    fn warning(&self, title: &str, message: &str) {
        self.push("warning", title, message);
    }

    fn error(&self, title: &str, message: &str) {
        self.push("error", title, message);
    }
}

/// Build a context around a recording notifier.
pub fn test_ctx(pool: PgPool) -> (AppContext, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    (AppContext::new(pool, notifier.clone()), notifier)
}

/// A minimal valid employee form.
pub fn employee_form(first: &str, email: &str) -> EmployeeForm {
    EmployeeForm {
        first_name: first.to_string(),
        email: email.to_string(),
        base_salary: "1000.00".to_string(),
        ..EmployeeForm::default()
    }
}

/// Insert an employee with a valid form and return the created row.
pub async fn add_employee(ctx: &AppContext, first: &str, email: &str) -> Employee {
    employees::add_employee(ctx, &employee_form(first, email))
        .await
        .expect("employee should be created")
}

/// Insert an employee assigned to a department by display name.
pub async fn add_employee_in_dept(ctx: &AppContext, first: &str, email: &str, dept: &str) -> Employee {
    let form = EmployeeForm {
        department: Some(DeptRef::ByName(dept.to_string())),
        ..employee_form(first, email)
    };
    employees::add_employee(ctx, &form)
        .await
        .expect("employee should be created")
}
