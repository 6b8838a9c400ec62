use crate::db::models::Account;
use crate::db::pool::DbPool;
use crate::db::queries::load_accounts;
use crate::errors::AppResult;
use crate::report::{ReportOptions, write_lines, write_section_header};
use crate::utils::formatting::{currency, fit, mask_secret, pad_left};
use std::io::Write;

pub const TITLE: &str = "Accounts";
pub const EMPTY: &str = "No accounts found.";

const NUMBER_W: usize = 6;
const HOLDER_W: usize = 15;
const BALANCE_W: usize = 11;

pub fn render_line(a: &Account, opts: &ReportOptions) -> String {
    let pin = if opts.show_secrets {
        a.pin.clone()
    } else {
        mask_secret(&a.pin)
    };

    format!(
        "Account #: {} | Name: {} | Balance: {} | PIN: {}",
        fit(&a.account_number, NUMBER_W),
        fit(&a.holder_name, HOLDER_W),
        pad_left(&currency(a.balance), BALANCE_W),
        pin,
    )
}

pub fn write_section<W: Write>(out: &mut W, pool: &DbPool, opts: &ReportOptions) -> AppResult<()> {
    write_section_header(out, TITLE)?;

    let lines: Vec<String> = load_accounts(pool)?
        .iter()
        .map(|a| render_line(a, opts))
        .collect();

    write_lines(out, &lines, EMPTY)
}
