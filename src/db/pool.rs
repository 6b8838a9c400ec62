//! Read-only SQLite handle shared by every report section.

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use rusqlite::{Connection, OpenFlags};

pub struct DbPool {
    pub conn: Connection,
    pub path: String,
}

impl DbPool {
    /// Open an existing store. Read-only mode means SQLite refuses to
    /// create a missing file, so a wrong path fails here and not later.
    pub fn open_read_only(path: &str) -> AppResult<Self> {
        let resolved = expand_tilde(path);
        if !resolved.is_file() {
            return Err(AppError::DatabaseNotFound(resolved.display().to_string()));
        }

        let conn = Connection::open_with_flags(
            &resolved,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        // opening is lazy; touch the header so a non-database file fails here
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))?;

        Ok(Self {
            conn,
            path: resolved.to_string_lossy().to_string(),
        })
    }

    /// Release the handle and report a failed close. Early returns skip
    /// this and rely on `Drop` instead.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| AppError::Db(e))
    }

    /// True when `table` exists in the store.
    pub fn has_table(&self, table: &str) -> AppResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}
