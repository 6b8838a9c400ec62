//! atmaudit library root.
//! Exposes the CLI parser, the high-level run() function, and the report
//! modules used by the binary and the integration tests.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod report;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Report) => cli::commands::report::handle(cfg),
        Some(cmd @ Commands::Db { .. }) => cli::commands::db::handle(cmd, cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
    }
}

/// Fold command-line overrides into the loaded configuration.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(limit) = cli.limit {
        cfg.report_limit = limit;
    }
    if cli.show_secrets {
        cfg.show_secrets = true;
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    apply_overrides(&cli, &mut cfg);

    dispatch(&cli, &cfg)
}
