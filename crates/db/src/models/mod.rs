//! Entity models and DTOs.
//!
//! One module per table. Row structs derive `FromRow`; status enums are
//! stored as TEXT with matching CHECK constraints in the schema.

pub mod attendance;
pub mod department;
pub mod employee;
pub mod payroll;

pub use attendance::{AttendanceDay, AttendanceStatus};
pub use department::Department;
pub use employee::{Employee, EmployeeListing, EmployeeStatus, NewEmployee};
pub use payroll::{PayrollEntry, PayrollFilter, PayrollListing};
