use crate::db::models::TechnicianActivity;
use crate::db::pool::DbPool;
use crate::db::queries::load_recent_activities;
use crate::errors::AppResult;
use crate::report::{ReportOptions, write_lines, write_section_header};
use crate::utils::formatting::{currency, fit, group_thousands, or_placeholder, pad_left};
use std::io::Write;

pub const EMPTY: &str = "No technician activities found.";
pub const NOT_APPLICABLE: &str = "N/A";

const TYPE_W: usize = 15;
const DESCRIPTION_W: usize = 25;
const VALUE_W: usize = 10;

pub fn title(limit: usize) -> String {
    format!("Technician activities log (last {})", limit)
}

/// Previous/new values are not always money (paper sheets, ink units),
/// so only `amount` gets a currency sign.
fn value_cell(value: Option<f64>, render: fn(f64) -> String) -> String {
    let text = value.map(render);
    pad_left(text.as_deref().unwrap_or(NOT_APPLICABLE), VALUE_W)
}

pub fn render_line(a: &TechnicianActivity) -> String {
    format!(
        "ID: {:3} | Type: {} | Amount: {} | Description: {} | Prev: {} | New: {} | Time: {}",
        a.id,
        fit(&a.activity_type, TYPE_W),
        value_cell(a.amount, currency),
        fit(a.description.as_deref().unwrap_or(""), DESCRIPTION_W),
        value_cell(a.previous_value, group_thousands),
        value_cell(a.new_value, group_thousands),
        or_placeholder(a.timestamp.as_deref(), "Unknown"),
    )
}

pub fn write_section<W: Write>(out: &mut W, pool: &DbPool, opts: &ReportOptions) -> AppResult<()> {
    write_section_header(out, &title(opts.limit))?;

    let lines: Vec<String> = load_recent_activities(pool, opts.limit)?
        .iter()
        .map(render_line)
        .collect();

    write_lines(out, &lines, EMPTY)
}
