//! Employee record management and department resolution.

use staffdesk_core::department::DeptRef;
use staffdesk_core::types::DbId;
use staffdesk_core::{validation, CoreError};
use staffdesk_db::models::{Employee, EmployeeListing, NewEmployee};
use staffdesk_db::repositories::{DepartmentRepo, EmployeeRepo};

use crate::error::{notify_failure, ServiceResult};
use crate::state::AppContext;

/// Raw form fields for creating or editing an employee.
///
/// Fields arrive as the presentation layer's text inputs; validation and
/// coercion happen here, before any statement executes.
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub department: Option<DeptRef>,
    pub base_salary: String,
}

impl EmployeeForm {
    /// Validate every field and resolve the department reference.
    async fn validate(&self, ctx: &AppContext) -> ServiceResult<NewEmployee> {
        let first_name = validation::optional(&self.first_name)
            .ok_or_else(|| CoreError::validation("First name is required"))?;

        let email = validation::optional(&self.email);
        if let Some(email) = &email {
            validation::validate_email(email)?;
        }

        let phone = validation::optional(&self.phone);
        if let Some(phone) = &phone {
            validation::validate_phone(phone)?;
        }

        let base_salary = validation::parse_salary(&self.base_salary)?;
        let department_id = resolve_department(ctx, self.department.as_ref()).await?;

        Ok(NewEmployee {
            first_name,
            last_name: validation::optional(&self.last_name),
            email,
            phone,
            job_title: validation::optional(&self.job_title),
            department_id,
            base_salary,
        })
    }
}

/// Resolve a department reference to a canonical id.
///
/// An id is taken at face value (an invalid one fails the write through the
/// foreign-key constraint); a name is matched exactly, and an unmatched
/// name is a validation error rather than a silent unassignment.
async fn resolve_department(
    ctx: &AppContext,
    dept: Option<&DeptRef>,
) -> ServiceResult<Option<DbId>> {
    match dept {
        None => Ok(None),
        Some(DeptRef::ById(id)) => {
            if *id <= 0 {
                return Err(CoreError::validation("Department ID must be positive").into());
            }
            Ok(Some(*id))
        }
        Some(DeptRef::ByName(name)) => {
            let id = DepartmentRepo::find_id_by_name(&ctx.pool, name).await?;
            id.map(Some)
                .ok_or_else(|| CoreError::validation(format!("Unknown department: {name}")).into())
        }
    }
}

/// Create an employee from validated form input.
pub async fn add_employee(ctx: &AppContext, form: &EmployeeForm) -> ServiceResult<Employee> {
    let result = async {
        let input = form.validate(ctx).await?;
        let employee = EmployeeRepo::insert(&ctx.pool, &input).await?;
        tracing::info!(employee_id = employee.id, "employee created");
        Ok(employee)
    }
    .await;
    result.inspect_err(|err| notify_failure(ctx.notifier.as_ref(), err))
}

/// Replace every editable field of an existing employee.
///
/// A missing employee is a not-found outcome, distinct from a validation
/// failure.
pub async fn update_employee(
    ctx: &AppContext,
    id: DbId,
    form: &EmployeeForm,
) -> ServiceResult<Employee> {
    let result = async {
        if id <= 0 {
            return Err(CoreError::validation("Invalid employee ID").into());
        }
        let input = form.validate(ctx).await?;
        let updated = EmployeeRepo::update(&ctx.pool, id, &input).await?;
        let employee = updated.ok_or(CoreError::NotFound {
            entity: "Employee",
            id,
        })?;
        tracing::info!(employee_id = id, "employee updated");
        Ok(employee)
    }
    .await;
    result.inspect_err(|err| notify_failure(ctx.notifier.as_ref(), err))
}

/// Delete an employee; attendance and payroll history go with it.
pub async fn delete_employee(ctx: &AppContext, id: DbId) -> ServiceResult<()> {
    let result = async {
        if id <= 0 {
            return Err(CoreError::validation("Invalid employee ID").into());
        }
        if !EmployeeRepo::delete(&ctx.pool, id).await? {
            return Err(CoreError::NotFound {
                entity: "Employee",
                id,
            }
            .into());
        }
        tracing::info!(employee_id = id, "employee deleted");
        Ok(())
    }
    .await;
    result.inspect_err(|err| notify_failure(ctx.notifier.as_ref(), err))
}

/// Fetch a single employee, for the edit form.
pub async fn find_employee(ctx: &AppContext, id: DbId) -> ServiceResult<Employee> {
    let result = async {
        EmployeeRepo::find_by_id(&ctx.pool, id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "Employee",
                    id,
                }
                .into()
            })
    }
    .await;
    result.inspect_err(|err| notify_failure(ctx.notifier.as_ref(), err))
}

/// List all employees with their department name, ordered by id.
pub async fn list_employees(ctx: &AppContext) -> ServiceResult<Vec<EmployeeListing>> {
    let result = EmployeeRepo::list_with_department(&ctx.pool)
        .await
        .map_err(Into::into);
    result.inspect_err(|err| notify_failure(ctx.notifier.as_ref(), err))
}

/// List all department names, ordered alphabetically. Feed for the
/// presentation layer's department picker.
pub async fn list_departments(ctx: &AppContext) -> ServiceResult<Vec<String>> {
    let result = DepartmentRepo::list(&ctx.pool)
        .await
        .map(|departments| departments.into_iter().map(|d| d.name).collect())
        .map_err(Into::into);
    result.inspect_err(|err| notify_failure(ctx.notifier.as_ref(), err))
}
