//! Headless operator frontend.
//!
//! Boots the same way a desktop embedding would (pool, health check,
//! migrations), builds a log-notifying [`AppContext`], and maps one
//! subcommand onto each service operation.

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use staffdesk_core::department::DeptRef;
use staffdesk_core::types::DbId;
use staffdesk_db::models::{AttendanceStatus, PayrollFilter};
use staffdesk_service::employees::EmployeeForm;
use staffdesk_service::{attendance, employees, payroll, AppContext};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "staffdesk", about = "Employee, attendance and payroll tracker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage employee records.
    Employee {
        #[command(subcommand)]
        command: EmployeeCommand,
    },
    /// List the department set.
    Departments,
    /// Attendance check-in/out and day status.
    Attendance {
        #[command(subcommand)]
        command: AttendanceCommand,
    },
    /// Monthly payroll generation and listing.
    Payroll {
        #[command(subcommand)]
        command: PayrollCommand,
    },
}

#[derive(clap::Args)]
struct EmployeeFields {
    /// First name (required for add/update).
    #[arg(long)]
    first: String,
    #[arg(long, default_value = "")]
    last: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    job: String,
    /// Department id or name; omit for no department.
    #[arg(long, default_value = "")]
    department: String,
    #[arg(long, default_value = "")]
    salary: String,
}

impl EmployeeFields {
    fn into_form(self) -> EmployeeForm {
        EmployeeForm {
            first_name: self.first,
            last_name: self.last,
            email: self.email,
            phone: self.phone,
            job_title: self.job,
            department: DeptRef::parse(&self.department),
            base_salary: self.salary,
        }
    }
}

#[derive(Subcommand)]
enum EmployeeCommand {
    /// Add a new employee.
    Add {
        #[command(flatten)]
        fields: EmployeeFields,
    },
    /// Replace an existing employee's fields.
    Update {
        id: DbId,
        #[command(flatten)]
        fields: EmployeeFields,
    },
    /// Delete an employee and their attendance/payroll history.
    Delete { id: DbId },
    /// Show one employee record.
    Show { id: DbId },
    /// List all employees with department names.
    List,
}

#[derive(Subcommand)]
enum AttendanceCommand {
    /// Mark in-time for today.
    In { employee_id: String },
    /// Mark out-time for today.
    Out { employee_id: String },
    /// Set the day status (PRESENT/ABSENT/LEAVE) for an explicit date.
    Mark {
        employee_id: DbId,
        date: NaiveDate,
        status: String,
    },
    /// Show the attendance sheet for a date.
    Day { date: NaiveDate },
    /// Show the full attendance history, newest day first.
    Log,
}

#[derive(Subcommand)]
enum PayrollCommand {
    /// Generate or regenerate payroll for one employee and month.
    ForEmployee {
        employee_id: String,
        year_month: String,
        base_salary: String,
    },
    /// Generate payroll for every ACTIVE employee for a month.
    Run { year_month: String },
    /// List payroll rows, optionally filtered.
    List {
        #[arg(long)]
        employee: Option<DbId>,
        #[arg(long)]
        month: Option<String>,
    },
}

fn parse_status(raw: &str) -> anyhow::Result<AttendanceStatus> {
    match raw.to_ascii_uppercase().as_str() {
        "PRESENT" => Ok(AttendanceStatus::Present),
        "ABSENT" => Ok(AttendanceStatus::Absent),
        "LEAVE" => Ok(AttendanceStatus::Leave),
        other => anyhow::bail!("status must be PRESENT, ABSENT or LEAVE, got {other}"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staffdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = staffdesk_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    staffdesk_db::health_check(&pool)
        .await
        .context("Database health check failed")?;

    // Without schema guarantees no operation below is sound; bail out.
    staffdesk_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    let ctx = AppContext::headless(pool);

    match cli.command {
        Command::Employee { command } => run_employee(&ctx, command).await?,
        Command::Departments => {
            for name in employees::list_departments(&ctx).await? {
                println!("{name}");
            }
        }
        Command::Attendance { command } => run_attendance(&ctx, command).await?,
        Command::Payroll { command } => run_payroll(&ctx, command).await?,
    }

    Ok(())
}

async fn run_employee(ctx: &AppContext, command: EmployeeCommand) -> anyhow::Result<()> {
    match command {
        EmployeeCommand::Add { fields } => {
            let employee = employees::add_employee(ctx, &fields.into_form()).await?;
            println!("Added employee {}", employee.id);
        }
        EmployeeCommand::Update { id, fields } => {
            employees::update_employee(ctx, id, &fields.into_form()).await?;
            println!("Updated employee {id}");
        }
        EmployeeCommand::Delete { id } => {
            employees::delete_employee(ctx, id).await?;
            println!("Deleted employee {id}");
        }
        EmployeeCommand::Show { id } => {
            let e = employees::find_employee(ctx, id).await?;
            println!(
                "{}  {} {}  <{}>  {}  hired {}  salary {}  {:?}",
                e.id,
                e.first_name,
                e.last_name.as_deref().unwrap_or(""),
                e.email.as_deref().unwrap_or(""),
                e.job_title.as_deref().unwrap_or(""),
                e.hire_date.date_naive(),
                e.base_salary,
                e.status,
            );
        }
        EmployeeCommand::List => {
            for row in employees::list_employees(ctx).await? {
                println!(
                    "{:>4}  {} {}  <{}>  {}  {}  {}",
                    row.id,
                    row.first_name,
                    row.last_name.as_deref().unwrap_or(""),
                    row.email.as_deref().unwrap_or(""),
                    row.job_title.as_deref().unwrap_or(""),
                    row.department_name,
                    row.base_salary,
                );
            }
        }
    }
    Ok(())
}

async fn run_attendance(ctx: &AppContext, command: AttendanceCommand) -> anyhow::Result<()> {
    match command {
        AttendanceCommand::In { employee_id } => {
            attendance::check_in(ctx, &employee_id).await?;
        }
        AttendanceCommand::Out { employee_id } => {
            attendance::check_out(ctx, &employee_id).await?;
        }
        AttendanceCommand::Mark {
            employee_id,
            date,
            status,
        } => {
            let status = parse_status(&status)?;
            let row = attendance::set_status(ctx, employee_id, date, status).await?;
            println!("Marked employee {} as {:?} on {}", row.employee_id, row.status, row.work_date);
        }
        AttendanceCommand::Day { date } => {
            for row in attendance::day_sheet(ctx, date).await? {
                println!(
                    "{:>4}  {:?}  in: {}  out: {}",
                    row.employee_id,
                    row.status,
                    row.in_time.map_or_else(|| "-".into(), |t| t.to_rfc3339()),
                    row.out_time.map_or_else(|| "-".into(), |t| t.to_rfc3339()),
                );
            }
        }
        AttendanceCommand::Log => {
            for row in attendance::history(ctx).await? {
                println!(
                    "{}  {:>4}  {:?}  in: {}  out: {}",
                    row.work_date,
                    row.employee_id,
                    row.status,
                    row.in_time.map_or_else(|| "-".into(), |t| t.to_rfc3339()),
                    row.out_time.map_or_else(|| "-".into(), |t| t.to_rfc3339()),
                );
            }
        }
    }
    Ok(())
}

async fn run_payroll(ctx: &AppContext, command: PayrollCommand) -> anyhow::Result<()> {
    match command {
        PayrollCommand::ForEmployee {
            employee_id,
            year_month,
            base_salary,
        } => {
            let entry =
                payroll::generate_for_employee(ctx, &employee_id, &year_month, &base_salary)
                    .await?;
            println!(
                "{}  employee {}  gross {}  net {}",
                entry.year_month, entry.employee_id, entry.gross_pay, entry.net_pay
            );
        }
        PayrollCommand::Run { year_month } => {
            let run = payroll::generate_for_month(ctx, &year_month).await?;
            println!(
                "{}: {} attempted, {} failed",
                run.year_month,
                run.attempted,
                run.failures.len()
            );
            for (employee_id, err) in &run.failures {
                println!("  employee {employee_id}: {err}");
            }
        }
        PayrollCommand::List { employee, month } => {
            let filter = PayrollFilter {
                employee_id: employee,
                year_month: month,
            };
            for row in payroll::list_payroll(ctx, &filter).await? {
                println!(
                    "{}  {:>4}  {} {}  gross {}  allow {}  deduct {}  net {}",
                    row.year_month,
                    row.employee_id,
                    row.first_name,
                    row.last_name.as_deref().unwrap_or(""),
                    row.gross_pay,
                    row.allowances,
                    row.deductions,
                    row.net_pay,
                );
            }
        }
    }
    Ok(())
}
