use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rDutyLog
/// CLI application to log flight time and track duty-time limits with SQLite
#[derive(Parser)]
#[command(
    name = "rdutylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Flight-time logging CLI: track per-person flight hours against daily, weekly and monthly duty limits",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

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

    /// Manage the configuration file (view, check, edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "set",
            value_name = "KEY=VALUE",
            help = "Set one configuration value (e.g. duty_limit_daily=9, window_boundary=exclusive)"
        )]
        set: Option<String>,

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

    /// Append a flight to a person's training log
    Add {
        /// Person (pilot / student) the flight belongs to
        person: String,

        /// Flight date (YYYY-MM-DD, YYYY-MM-DDTHH:MM or RFC 3339)
        date: String,

        /// Flight duration in decimal hours (e.g. 1.5)
        hours: f64,
    },

    /// Import a JSON training log: [{"date": "...", "flightDuration": 1.5}, ...]
    Import {
        /// Person the imported entries belong to
        person: String,

        #[arg(long, value_name = "FILE", help = "JSON file to import")]
        file: String,
    },

    /// List training log entries
    List {
        #[arg(long, help = "Only entries of this person")]
        person: Option<String>,

        #[arg(
            long,
            short,
            help = "Filter by YYYY, YYYY-MM, YYYY-MM-DD, a range A:B, or 'all' (default: current month)"
        )]
        period: Option<String>,
    },

    /// Show daily / weekly / monthly duty status for a person
    Status {
        person: String,

        #[arg(
            long,
            value_name = "DATETIME",
            help = "Evaluate at this instant instead of the current time (YYYY-MM-DD[THH:MM])"
        )]
        now: Option<String>,

        #[arg(long, help = "Print the status as JSON")]
        json: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Store the backup as a zip archive")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export training log entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Only entries of this person")]
        person: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
