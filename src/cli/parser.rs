use crate::export::ExportFormat;
use crate::models::employee::Role;
use crate::models::event_kind::EventKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPunchclock
/// Employee time clock: PIN punches, status board and worked-hours reports on SQLite
#[derive(Parser)]
#[command(
    name = "rpunchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee time clock: punch events, current status board and worked-hours reports using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check the configuration file for missing fields and add their defaults"
        )]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage departments
    Dept {
        #[command(subcommand)]
        action: DeptAction,
    },

    /// Manage employees (admin)
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Check an employee's PIN
    Login {
        #[arg(long = "doc", help = "Employee document id")]
        doc: String,

        #[arg(long = "pin", help = "4-digit PIN")]
        pin: String,
    },

    /// Punch a clock event (entry, meal, smoke-break, dinner, shift-end)
    Punch {
        #[arg(value_enum)]
        kind: EventKind,

        #[arg(long = "doc", help = "Employee document id")]
        doc: String,

        #[arg(long = "pin", help = "4-digit PIN")]
        pin: String,

        #[arg(
            long = "at",
            help = "Event time: HH:MM[:SS] (today) or 'YYYY-MM-DD HH:MM[:SS]'; default now"
        )]
        at: Option<String>,

        #[arg(long = "lat", allow_negative_numbers = true, help = "Latitude")]
        lat: Option<f64>,

        #[arg(long = "lon", allow_negative_numbers = true, help = "Longitude")]
        lon: Option<f64>,
    },

    /// Show the current status of every active employee
    Status {
        #[arg(long = "dept", help = "Only employees of this department")]
        dept: Option<String>,

        #[arg(long = "date", help = "Reference day (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Worked hours of one employee over a period
    Hours {
        #[arg(long = "doc", help = "Employee document id")]
        doc: String,

        #[arg(
            long,
            short,
            help = "YYYY, YYYY-MM, YYYY-MM-DD or a range start:end (default: current month)"
        )]
        period: Option<String>,

        #[arg(long = "details", help = "List the events inside each session")]
        details: bool,

        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// List punch events
    History {
        #[arg(long = "doc", help = "Only this employee")]
        doc: Option<String>,

        #[arg(long = "dept", help = "Only this department")]
        dept: Option<String>,

        #[arg(long, short, help = "YYYY, YYYY-MM, YYYY-MM-DD or a range start:end")]
        period: Option<String>,

        #[arg(long = "newest", help = "Newest events first")]
        newest: bool,
    },

    /// Dashboard figures for a day
    Stats {
        #[arg(long = "date", help = "Reference day (YYYY-MM-DD), default today")]
        date: Option<String>,
    },

    /// Export punch events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, value_name = "RANGE")]
        period: Option<String>,

        #[arg(long = "doc")]
        doc: Option<String>,

        #[arg(long = "dept")]
        dept: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum DeptAction {
    /// Create a department
    Add { name: String },

    /// List departments with their active head-count
    List,
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Create an employee
    Add {
        #[arg(long = "doc")]
        doc: String,

        #[arg(long = "name")]
        name: String,

        #[arg(long = "surname")]
        surname: String,

        #[arg(long = "pin")]
        pin: String,

        #[arg(long = "role", value_enum, default_value = "worker")]
        role: Role,

        #[arg(long = "dept", help = "Department name (default from config)")]
        dept: Option<String>,

        #[arg(long = "phone")]
        phone: Option<String>,
    },

    /// List employees
    List {
        #[arg(long = "all", help = "Include deactivated employees")]
        all: bool,

        #[arg(long = "dept")]
        dept: Option<String>,
    },

    /// Change an employee's PIN
    SetPin {
        #[arg(long = "doc")]
        doc: String,

        #[arg(long = "pin")]
        pin: String,
    },

    /// Change an employee's role
    SetRole {
        #[arg(long = "doc")]
        doc: String,

        #[arg(long = "role", value_enum)]
        role: Role,
    },

    /// Deactivate an employee (soft delete)
    Deactivate {
        #[arg(long = "doc")]
        doc: String,
    },

    /// Re-activate an employee
    Activate {
        #[arg(long = "doc")]
        doc: String,
    },
}
