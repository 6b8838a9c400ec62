use crate::db::models::TechnicianCredential;
use crate::db::pool::DbPool;
use crate::db::queries::load_credentials;
use crate::errors::AppResult;
use crate::report::{ReportOptions, write_lines, write_section_header};
use crate::utils::formatting::{fit, mask_secret, or_placeholder};
use std::io::Write;

pub const TITLE: &str = "Technician credentials";
pub const EMPTY: &str = "No technician credentials found.";

const USERNAME_W: usize = 15;
const PASSWORD_W: usize = 10;
const NAME_W: usize = 25;
const ROLE_W: usize = 10;

pub fn render_line(c: &TechnicianCredential, opts: &ReportOptions) -> String {
    let password = if opts.show_secrets {
        c.password.clone()
    } else {
        mask_secret(&c.password)
    };

    format!(
        "ID: {} | Username: {} | Password: {} | Name: {} | Role: {} | Created: {} | Last Login: {}",
        c.id,
        fit(&c.username, USERNAME_W),
        fit(&password, PASSWORD_W),
        fit(c.full_name.as_deref().unwrap_or(""), NAME_W),
        fit(&c.role, ROLE_W),
        or_placeholder(c.created_date.as_deref(), "Unknown"),
        or_placeholder(c.last_login.as_deref().filter(|s| !s.is_empty()), "Never"),
    )
}

pub fn write_section<W: Write>(out: &mut W, pool: &DbPool, opts: &ReportOptions) -> AppResult<()> {
    write_section_header(out, TITLE)?;

    let lines: Vec<String> = load_credentials(pool)?
        .iter()
        .map(|c| render_line(c, opts))
        .collect();

    write_lines(out, &lines, EMPTY)
}
