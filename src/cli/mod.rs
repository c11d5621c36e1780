//! CLI command definitions and handlers

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
pub use clap_complete::Shell;
use std::path::PathBuf;

pub mod clock;
pub mod context;
pub mod dashboard;
pub mod employee;
pub mod evaluation;
pub mod leave;
pub mod login;
pub mod logout;
pub mod payroll;
pub mod position;
pub mod profile;
pub mod schedule;
pub mod status;

pub use context::CommandContext;

/// Global options shared by every command
#[derive(Debug, Clone)]
pub struct Globals {
    pub format: OutputFormat,
    pub config: Option<String>,
    pub gateway: Option<String>,
}

impl Cli {
    pub fn globals(&self) -> Globals {
        Globals {
            format: self.format,
            config: self.config.clone(),
            gateway: self.gateway.clone(),
        }
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Adjustment direction for payroll commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AdjustKind {
    Bonus,
    Deduction,
}

/// hrops - CLI companion for the RH Systems HR platform
#[derive(Parser, Debug)]
#[command(name = "hrops")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "HROPS_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "HROPS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Route all services through one gateway base URL
    #[arg(long, global = true, env = "HROPS_GATEWAY", hide_env = true)]
    pub gateway: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "HROPS_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in to the platform
    Login {
        /// Account email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,

        /// Account password (prompted when omitted; prefer the prompt)
        #[arg(long, env = "HROPS_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Sign out and clear the stored session
    Logout,

    /// Show configuration and session status
    Status,

    /// Display version information
    Version,

    /// Platform summary counters (admin)
    Dashboard,

    /// Show your employee record (employee)
    Profile,

    /// Manage employees (admin)
    #[command(subcommand)]
    Employee(EmployeeCommands),

    /// Manage positions (admin)
    #[command(subcommand)]
    Position(PositionCommands),

    /// Manage leave and status records
    #[command(subcommand)]
    Leave(LeaveCommands),

    /// Manage work schedules
    #[command(subcommand)]
    Schedule(ScheduleCommands),

    /// Track worked time (employee)
    #[command(subcommand)]
    Clock(ClockCommands),

    /// View payrolls and adjustments
    #[command(subcommand)]
    Payroll(PayrollCommands),

    /// Manage performance evaluations
    #[command(subcommand)]
    Evaluation(EvaluationCommands),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Employee management subcommands
#[derive(Subcommand, Debug)]
pub enum EmployeeCommands {
    /// List all employees
    List,

    /// Show one employee
    Get { id: i64 },

    /// Create an employee
    Create {
        #[arg(long)]
        dni: String,
        #[arg(long)]
        name: String,
        #[arg(long = "last-name")]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        password: String,
        /// Position ID to assign
        #[arg(long)]
        position: i64,
    },

    /// Update an employee (unset flags keep current values)
    Update {
        id: i64,
        #[arg(long)]
        dni: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "last-name")]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        position: Option<i64>,
    },

    /// Delete an employee
    Delete {
        id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Position management subcommands
#[derive(Subcommand, Debug)]
pub enum PositionCommands {
    /// List all positions
    List,

    /// Show one position
    Get { id: i64 },

    /// Create a position
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        salary: f32,
    },

    /// Update a position (unset flags keep current values)
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        salary: Option<f32>,
    },

    /// Delete a position
    Delete {
        id: i64,
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Leave/status record subcommands
#[derive(Subcommand, Debug)]
pub enum LeaveCommands {
    /// List all records (admin)
    List,

    /// Show one record (admin)
    Get { id: i64 },

    /// Create a record for any employee (admin)
    Create {
        #[arg(long)]
        employee: i64,
        /// Record type, e.g. VACATION or SICK_LEAVE
        #[arg(long)]
        kind: String,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        /// Paid fraction of the period
        #[arg(long, default_value_t = 1.0)]
        paid: f32,
        #[arg(long)]
        description: String,
        /// Status permission ID
        #[arg(long, default_value_t = 1)]
        permission: i64,
    },

    /// Update a record (admin; unset flags keep current values)
    Update {
        id: i64,
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(long)]
        paid: Option<f32>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        permission: Option<i64>,
    },

    /// Delete a record (admin)
    Delete {
        id: i64,
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List your own records (employee)
    Mine,

    /// File a request for yourself (employee)
    Request {
        #[arg(long)]
        kind: String,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        #[arg(long, default_value_t = 1.0)]
        paid: f32,
        #[arg(long)]
        description: String,
        #[arg(long, default_value_t = 1)]
        permission: i64,
    },
}

/// Schedule management subcommands
#[derive(Subcommand, Debug)]
pub enum ScheduleCommands {
    /// List all schedules (admin)
    List,

    /// Show one schedule by ID or date (admin)
    Get {
        id: Option<i64>,
        /// Look up by date instead of ID
        #[arg(long, conflicts_with = "id")]
        date: Option<NaiveDate>,
    },

    /// Create a schedule; total hours derive from the times (admin)
    Create {
        #[arg(long)]
        date: NaiveDate,
        /// Shift start, e.g. 09:00
        #[arg(long = "start-time")]
        start_time: String,
        /// Shift end, e.g. 17:30
        #[arg(long = "exit-time")]
        exit_time: String,
        /// Hours deducted for breaks
        #[arg(long, default_value_t = 0.0)]
        deducted: f32,
        /// Employees to assign at creation
        #[arg(long, value_delimiter = ',')]
        employees: Option<Vec<i64>>,
    },

    /// Update a schedule (admin; unset flags keep current values)
    Update {
        id: i64,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long = "start-time")]
        start_time: Option<String>,
        #[arg(long = "exit-time")]
        exit_time: Option<String>,
        #[arg(long)]
        deducted: Option<f32>,
    },

    /// Delete a schedule (admin)
    Delete {
        id: i64,
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Assign an employee to a schedule (admin)
    Assign {
        #[arg(long)]
        employee: i64,
        #[arg(long)]
        schedule: i64,
    },

    /// Remove an employee from a schedule (admin)
    Unassign {
        #[arg(long)]
        employee: i64,
        #[arg(long)]
        schedule: i64,
    },

    /// List your own schedules (employee)
    Mine,
}

/// Time tracking subcommands
#[derive(Subcommand, Debug)]
pub enum ClockCommands {
    /// Start the clock
    In,

    /// Stop the clock and register the worked hours
    Out,

    /// Show the open clock-in, if any
    Status,

    /// List registered worked-hours entries
    Log,
}

/// Payroll subcommands
#[derive(Subcommand, Debug)]
pub enum PayrollCommands {
    /// List payrolls (admin)
    List {
        /// Only this employee's payrolls
        #[arg(long)]
        employee: Option<i64>,
    },

    /// Show one payroll with its adjustments (admin)
    Get { id: i64 },

    /// List your own payrolls (employee)
    Mine,

    /// Write a payslip receipt for one of your payrolls (employee)
    Receipt {
        id: i64,
        /// Output file (defaults to payslip_<id>_<date>.txt)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Manage adjustments (admin)
    #[command(subcommand)]
    Adjust(AdjustCommands),
}

/// Payroll adjustment subcommands
#[derive(Subcommand, Debug)]
pub enum AdjustCommands {
    /// Add an adjustment to a payroll
    Add {
        #[arg(long)]
        payroll: i64,
        #[arg(long = "type", value_enum)]
        kind: AdjustKind,
        #[arg(long)]
        amount: f32,
        #[arg(long)]
        description: String,
    },

    /// Remove an adjustment from a payroll
    Remove {
        #[arg(long)]
        payroll: i64,
        #[arg(long)]
        adjustment: i64,
    },
}

/// Evaluation subcommands
#[derive(Subcommand, Debug)]
pub enum EvaluationCommands {
    /// List evaluations (admin)
    List {
        /// Only this employee's evaluations
        #[arg(long)]
        employee: Option<i64>,
    },

    /// Show one evaluation (admin)
    Get { id: i64 },

    /// Create an evaluation (admin)
    Create {
        #[arg(long)]
        employee: i64,
        #[arg(long)]
        date: NaiveDate,
        /// Score on the 0-10 scale
        #[arg(long)]
        score: f32,
        #[arg(long)]
        comments: String,
    },

    /// Update an evaluation (admin; unset flags keep current values)
    Update {
        id: i64,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        score: Option<f32>,
        #[arg(long)]
        comments: Option<String>,
    },

    /// Delete an evaluation (admin)
    Delete {
        id: i64,
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List your own evaluations (employee)
    Mine,
}
