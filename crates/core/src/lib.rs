//! Pure domain logic for the staffdesk workforce tracker.
//!
//! This crate has zero internal dependencies and no database access so it
//! can be used by the repository layer, the service layer, and any future
//! tooling alike. It holds the shared ID/timestamp types, the domain error
//! enum, input validation, the department reference type, and the payroll
//! math.

pub mod department;
pub mod error;
pub mod payroll;
pub mod types;
pub mod validation;

pub use error::CoreError;
