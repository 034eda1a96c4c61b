use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worksummary
/// CLI application to record daily work summaries with SQLite
#[derive(Parser)]
#[command(
    name = "worksummary",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record daily work summaries (date, name, department, description, summary) in SQLite",
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
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Manage the database (integrity checks, statistics, etc.)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Add a work record
    Add {
        /// Date of the work (default: today, YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Person the record belongs to
        #[arg(long)]
        name: Option<String>,

        /// Department
        #[arg(long = "dept", visible_alias = "department")]
        department: Option<String>,

        /// Free-text description
        #[arg(long = "desc", visible_alias = "description")]
        description: Option<String>,

        /// Today's work summary
        #[arg(long)]
        summary: Option<String>,
    },

    /// List all records
    List,

    /// Show a single record in full
    Show {
        /// Record id
        id: i64,
    },

    /// Update a record; fields not given keep their current value
    Update {
        /// Record id
        id: i64,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "dept", visible_alias = "department")]
        department: Option<String>,

        #[arg(long = "desc", visible_alias = "description")]
        description: Option<String>,

        #[arg(long)]
        summary: Option<String>,
    },

    /// Delete a record by id
    Del {
        /// Record id
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export all records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
