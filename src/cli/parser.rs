use clap::{Parser, Subcommand};

/// Command-line interface definition for atmaudit
/// Read-only audit reports over the SQLite store of a simulated ATM
#[derive(Parser, Debug)]
#[command(
    name = "atmaudit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print column-aligned audit reports from an ATM SQLite database",
    long_about = None
)]
pub struct Cli {
    /// Override database path
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Rows shown in the transaction and activity sections
    #[arg(global = true, long = "limit")]
    pub limit: Option<usize>,

    /// Print technician passwords and account PINs in cleartext
    #[arg(global = true, long = "show-secrets")]
    pub show_secrets: bool,

    /// Defaults to `report` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Print the five-section audit report
    Report,

    /// Inspect the database file
    Db {
        #[arg(long = "info", help = "Show file size, row counts and bank-note inventory")]
        info: bool,

        #[arg(long = "check", help = "Run SQLite integrity check")]
        check: bool,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,
    },
}
