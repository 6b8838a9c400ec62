use crate::db::models::Transaction;
use crate::db::pool::DbPool;
use crate::db::queries::load_recent_transactions;
use crate::errors::AppResult;
use crate::report::{ReportOptions, write_lines, write_section_header};
use crate::utils::formatting::{currency, fit, or_placeholder, pad_left};
use std::io::Write;

pub const EMPTY: &str = "No transactions found.";

const ACCOUNT_W: usize = 6;
const HOLDER_W: usize = 15;
const TYPE_W: usize = 15;
const MONEY_W: usize = 10;

pub fn title(limit: usize) -> String {
    format!("Transactions log (last {})", limit)
}

pub fn render_line(t: &Transaction) -> String {
    format!(
        "ID: {:3} | Account: {} | Holder: {} | Type: {} | Amount: {} | Prev: {} | New: {} | Time: {}",
        t.id,
        fit(&t.account_number, ACCOUNT_W),
        fit(&t.account_holder, HOLDER_W),
        fit(&t.transaction_type, TYPE_W),
        pad_left(&currency(t.amount), MONEY_W),
        pad_left(&currency(t.previous_balance), MONEY_W),
        pad_left(&currency(t.new_balance), MONEY_W),
        or_placeholder(t.timestamp.as_deref(), "Unknown"),
    )
}

pub fn write_section<W: Write>(out: &mut W, pool: &DbPool, opts: &ReportOptions) -> AppResult<()> {
    write_section_header(out, &title(opts.limit))?;

    let lines: Vec<String> = load_recent_transactions(pool, opts.limit)?
        .iter()
        .map(render_line)
        .collect();

    write_lines(out, &lines, EMPTY)
}
