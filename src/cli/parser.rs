use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for mesai
/// CLI application to track employee attendance with SQLite
#[derive(Parser)]
#[command(
    name = "mesai",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track employee punch events, daily worked hours, and schedule irregularities",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or vi)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
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

    /// Print rows from the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage departments
    Department {
        #[arg(long = "add", value_name = "NAME", help = "Create a department")]
        add: Option<String>,

        #[arg(long = "code", help = "Short code for the new department (with --add)")]
        code: Option<String>,

        #[arg(long = "del", value_name = "CODE", help = "Delete a department by code")]
        del: Option<String>,

        #[arg(long = "list", help = "List all departments")]
        list: bool,
    },

    /// Manage employees
    Employee {
        #[arg(long = "add", value_name = "NAME", help = "Create an employee")]
        add: Option<String>,

        #[arg(long = "code", help = "Short code for the new employee (with --add)")]
        code: Option<String>,

        #[arg(long = "dept", help = "Department code to assign (with --add)")]
        dept: Option<String>,

        #[arg(long = "del", value_name = "CODE", help = "Delete an employee by code")]
        del: Option<String>,

        #[arg(long = "list", help = "List all employees")]
        list: bool,
    },

    /// Set or show a department's expected daily schedule
    Schedule {
        /// Department code
        dept: String,

        #[arg(long = "work-start", help = "Expected work start (HH:MM)")]
        work_start: Option<String>,

        #[arg(long = "work-end", help = "Expected work end (HH:MM)")]
        work_end: Option<String>,

        #[arg(long = "lunch-start", help = "Expected lunch start (HH:MM)")]
        lunch_start: Option<String>,

        #[arg(long = "lunch-end", help = "Expected lunch end (HH:MM)")]
        lunch_end: Option<String>,

        #[arg(long = "show", help = "Show the department's schedule")]
        show: bool,
    },

    /// Record a punch event for an employee
    Punch {
        /// Employee code
        employee: String,

        /// Punch kind: check-in, check-out, lunch-start, lunch-end
        /// (aliases: in, out)
        kind: String,

        #[arg(long = "date", help = "Date of the punch (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "time", help = "Time of the punch (HH:MM, default now)")]
        time: Option<String>,
    },

    /// List punch events
    List {
        #[arg(long = "employee", help = "Filter by employee code")]
        employee: Option<String>,

        #[arg(long = "from", help = "Start date (YYYY-MM-DD, inclusive)")]
        from: Option<String>,

        #[arg(long = "to", help = "End date (YYYY-MM-DD, inclusive)")]
        to: Option<String>,

        #[arg(long = "kind", help = "Filter by punch kind")]
        kind: Option<String>,

        #[arg(
            long = "last",
            help = "Show only the employee's latest punch (requires --employee)"
        )]
        last: bool,
    },

    /// Show daily worked hours for an employee
    Hours {
        /// Employee code
        employee: String,

        #[arg(long = "from", help = "Start date (YYYY-MM-DD, inclusive)")]
        from: Option<String>,

        #[arg(long = "to", help = "End date (YYYY-MM-DD, inclusive)")]
        to: Option<String>,
    },

    /// Build the schedule-irregularity report
    Report {
        #[arg(long = "employee", help = "Restrict to one employee code")]
        employee: Option<String>,

        #[arg(long = "dept", help = "Restrict to one department code")]
        dept: Option<String>,

        #[arg(
            long = "kind",
            help = "Restrict to irregularity kinds (repeatable): late, early, long-lunch, short-day, missing-check, missing-lunch"
        )]
        kinds: Vec<String>,

        #[arg(long = "from", help = "Start date (YYYY-MM-DD, inclusive)")]
        from: Option<String>,

        #[arg(long = "to", help = "End date (YYYY-MM-DD, inclusive)")]
        to: Option<String>,
    },

    /// Export the punch log or the irregularity report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "report", help = "Export the irregularity report instead of the punch log")]
        report: bool,

        #[arg(long = "employee", help = "Filter punch log by employee code")]
        employee: Option<String>,

        #[arg(long = "from", help = "Start date (YYYY-MM-DD, inclusive)")]
        from: Option<String>,

        #[arg(long = "to", help = "End date (YYYY-MM-DD, inclusive)")]
        to: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },
}
