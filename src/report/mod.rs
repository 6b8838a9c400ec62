//! Five-section audit report over the ATM store.
//!
//! Sections are queried and rendered one at a time, in a fixed order, into
//! any `Write` sink. A query failure aborts the run; whatever was already
//! written stays written.

pub mod accounts;
pub mod activities;
pub mod credentials;
pub mod machine;
pub mod transactions;

use crate::config::DEFAULT_REPORT_LIMIT;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use std::io::Write;

pub const RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Row cap for the transaction and activity sections.
    pub limit: usize,
    /// Print passwords and PINs in cleartext instead of masking them.
    pub show_secrets: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_REPORT_LIMIT,
            show_secrets: false,
        }
    }
}

impl ReportOptions {
    pub fn new(limit: usize, show_secrets: bool) -> AppResult<Self> {
        if limit == 0 || i64::try_from(limit).is_err() {
            return Err(AppError::InvalidLimit(limit));
        }
        Ok(Self {
            limit,
            show_secrets,
        })
    }
}

/// Blank line, rule, title, rule.
pub fn write_section_header<W: Write>(out: &mut W, title: &str) -> AppResult<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", title.to_uppercase())?;
    writeln!(out, "{}", rule)?;
    Ok(())
}

/// Write the section body, or `placeholder` when there are no rows.
pub(crate) fn write_lines<W: Write>(
    out: &mut W,
    lines: &[String],
    placeholder: &str,
) -> AppResult<()> {
    if lines.is_empty() {
        writeln!(out, "{}", placeholder)?;
        return Ok(());
    }
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Render all five sections in order: credentials, accounts, machine
/// state, transactions, technician activities.
pub fn write_report<W: Write>(out: &mut W, pool: &DbPool, opts: &ReportOptions) -> AppResult<()> {
    credentials::write_section(out, pool, opts)?;
    accounts::write_section(out, pool, opts)?;
    machine::write_section(out, pool, opts)?;
    transactions::write_section(out, pool, opts)?;
    activities::write_section(out, pool, opts)?;
    out.flush()?;
    Ok(())
}
