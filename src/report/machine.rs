use crate::db::models::MachineState;
use crate::db::pool::DbPool;
use crate::db::queries::load_machine_state;
use crate::errors::AppResult;
use crate::report::{ReportOptions, write_lines, write_section_header};
use crate::utils::formatting::{currency, pad_left};
use std::io::Write;

pub const TITLE: &str = "ATM state";
pub const EMPTY: &str = "No ATM state found.";

const CASH_W: usize = 11;

pub fn render_line(m: &MachineState) -> String {
    format!(
        "ATM Cash: {} | Paper Sheets: {:3} | Ink Units: {:3}",
        pad_left(&currency(m.cash), CASH_W),
        m.paper_sheets,
        m.ink_units,
    )
}

pub fn write_section<W: Write>(
    out: &mut W,
    pool: &DbPool,
    _opts: &ReportOptions,
) -> AppResult<()> {
    write_section_header(out, TITLE)?;

    let lines: Vec<String> = load_machine_state(pool)?.iter().map(render_line).collect();

    write_lines(out, &lines, EMPTY)
}
