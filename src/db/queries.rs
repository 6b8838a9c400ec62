use crate::db::models::{
    Account, BankNote, MachineState, TechnicianActivity, TechnicianCredential, Transaction,
};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::formatting::render_epoch;
use rusqlite::types::{Type, ValueRef};
use rusqlite::{Result, Row};

/// Tables read by the report, in report order.
pub const REPORT_TABLES: [&str; 5] = [
    "technician_credentials",
    "accounts",
    "atm_state",
    "transactions",
    "technician_activities",
];

/// Read a TIMESTAMP column that may hold text or an epoch integer.
fn timestamp_at(row: &Row, idx: usize) -> Result<Option<String>> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(i) => Ok(Some(render_epoch(i))),
        ValueRef::Real(f) => Ok(Some(render_epoch(f as i64))),
        ValueRef::Text(t) => Ok(Some(String::from_utf8_lossy(t).into_owned())),
        ValueRef::Blob(_) => Err(rusqlite::Error::InvalidColumnType(
            idx,
            "timestamp".to_string(),
            Type::Blob,
        )),
    }
}

pub fn map_credential(row: &Row) -> Result<TechnicianCredential> {
    Ok(TechnicianCredential {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
        full_name: row.get(3)?,
        role: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        created_date: timestamp_at(row, 5)?,
        last_login: timestamp_at(row, 6)?,
    })
}

pub fn map_account(row: &Row) -> Result<Account> {
    Ok(Account {
        account_number: row.get(0)?,
        holder_name: row.get(1)?,
        balance: row.get(2)?,
        pin: row.get(3)?,
    })
}

pub fn map_machine_state(row: &Row) -> Result<MachineState> {
    Ok(MachineState {
        cash: row.get(0)?,
        paper_sheets: row.get(1)?,
        ink_units: row.get(2)?,
    })
}

pub fn map_transaction(row: &Row) -> Result<Transaction> {
    Ok(Transaction {
        id: row.get(0)?,
        account_number: row.get(1)?,
        account_holder: row.get(2)?,
        transaction_type: row.get(3)?,
        amount: row.get(4)?,
        previous_balance: row.get(5)?,
        new_balance: row.get(6)?,
        timestamp: timestamp_at(row, 7)?,
    })
}

pub fn map_activity(row: &Row) -> Result<TechnicianActivity> {
    Ok(TechnicianActivity {
        id: row.get(0)?,
        activity_type: row.get(1)?,
        amount: row.get(2)?,
        description: row.get(3)?,
        previous_value: row.get(4)?,
        new_value: row.get(5)?,
        timestamp: timestamp_at(row, 6)?,
    })
}

/// SQLite treats a negative LIMIT as unbounded, so refuse anything that would wrap.
fn sql_limit(limit: usize) -> AppResult<i64> {
    i64::try_from(limit).map_err(|_| AppError::InvalidLimit(limit))
}

/// All technician credentials, in storage order.
pub fn load_credentials(pool: &DbPool) -> AppResult<Vec<TechnicianCredential>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, username, password, full_name, role, created_date, last_login
         FROM technician_credentials",
    )?;

    let rows = stmt.query_map([], map_credential)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All customer accounts, in storage order.
pub fn load_accounts(pool: &DbPool) -> AppResult<Vec<Account>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT account_number, account_holder, balance, pin FROM accounts")?;

    let rows = stmt.query_map([], map_account)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_machine_state(pool: &DbPool) -> AppResult<Vec<MachineState>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT atm_cash, paper_sheets, ink FROM atm_state")?;

    let rows = stmt.query_map([], map_machine_state)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// The `limit` most recent transactions, newest (highest id) first.
pub fn load_recent_transactions(pool: &DbPool, limit: usize) -> AppResult<Vec<Transaction>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, account_number, account_holder, transaction_type,
                amount, previous_balance, new_balance, timestamp
         FROM transactions
         ORDER BY id DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map([sql_limit(limit)?], map_transaction)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// The `limit` most recent technician activities, newest (highest id) first.
pub fn load_recent_activities(
    pool: &DbPool,
    limit: usize,
) -> AppResult<Vec<TechnicianActivity>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, activity_type, amount, description, previous_value, new_value, timestamp
         FROM technician_activities
         ORDER BY id DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map([sql_limit(limit)?], map_activity)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_bank_notes(pool: &DbPool) -> AppResult<Vec<BankNote>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT denomination, quantity FROM bank_notes ORDER BY denomination ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(BankNote {
            denomination: row.get(0)?,
            quantity: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_rows(pool: &DbPool, table: &str) -> AppResult<i64> {
    // table names come from REPORT_TABLES / fixed literals, never from user input
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    let count = pool.conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(count)
}
