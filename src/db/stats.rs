use crate::db::pool::DbPool;
use crate::db::queries::{REPORT_TABLES, count_rows, load_bank_notes};
use crate::errors::AppResult;
use crate::utils::formatting::{currency, fit};
use std::fs;
use std::io::Write;

/// File size, per-table row counts and, when the table exists, the
/// bank-note inventory.
pub fn write_db_info<W: Write>(out: &mut W, pool: &DbPool) -> AppResult<()> {
    //
    // 1) FILE
    //
    let file_size = fs::metadata(&pool.path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    writeln!(out, "• File: {}", pool.path)?;
    writeln!(out, "• Size: {:.2} KB", file_kb)?;

    //
    // 2) ROW COUNTS
    //
    writeln!(out, "• Rows:")?;
    for table in REPORT_TABLES {
        if pool.has_table(table)? {
            writeln!(out, "    {} {}", fit(table, 24), count_rows(pool, table)?)?;
        } else {
            writeln!(out, "    {} missing", fit(table, 24))?;
        }
    }

    //
    // 3) NOTE INVENTORY
    //
    if pool.has_table("bank_notes")? {
        let notes = load_bank_notes(pool)?;
        let total: i64 = notes.iter().map(|n| n.denomination * n.quantity).sum();

        writeln!(out, "• Bank notes:")?;
        for n in &notes {
            writeln!(
                out,
                "    {:>4} x {:<5} = {}",
                n.denomination,
                n.quantity,
                currency((n.denomination * n.quantity) as f64)
            )?;
        }
        writeln!(out, "    total: {}", currency(total as f64))?;
    }

    Ok(())
}

/// `PRAGMA integrity_check`: `Ok(None)` when healthy, otherwise the problems.
pub fn integrity_check(pool: &DbPool) -> AppResult<Option<String>> {
    let mut stmt = pool.conn.prepare("PRAGMA integrity_check")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut problems = Vec::new();
    for r in rows {
        problems.push(r?);
    }

    if problems.len() == 1 && problems[0] == "ok" {
        Ok(None)
    } else {
        Ok(Some(problems.join("\n")))
    }
}
