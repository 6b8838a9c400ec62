//! Unified application error type.
//! Every module (db, report, cli, config) returns AppError so that a fatal
//! failure surfaces in one place: `main` prints it and exits non-zero.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database not found: {0}")]
    DatabaseNotFound(String),

    // ---------------------------
    // Config / arguments
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid row limit: {0} (must be between 1 and {max})", max = i64::MAX)]
    InvalidLimit(usize),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
