#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SCHEMA: &str = "
    CREATE TABLE technician_credentials (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        full_name TEXT,
        role TEXT DEFAULT 'TECHNICIAN',
        created_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        last_login TIMESTAMP
    );
    CREATE TABLE accounts (
        account_number TEXT PRIMARY KEY,
        account_holder TEXT NOT NULL,
        balance REAL NOT NULL,
        pin TEXT NOT NULL
    );
    CREATE TABLE atm_state (
        id INTEGER PRIMARY KEY,
        atm_cash REAL NOT NULL,
        paper_sheets INTEGER NOT NULL,
        ink INTEGER NOT NULL,
        last_updated TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    );
    CREATE TABLE bank_notes (
        denomination INTEGER PRIMARY KEY,
        quantity INTEGER NOT NULL DEFAULT 0,
        last_updated TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    );
    CREATE TABLE transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        account_number TEXT NOT NULL,
        account_holder TEXT NOT NULL,
        transaction_type TEXT NOT NULL,
        amount REAL NOT NULL,
        previous_balance REAL NOT NULL,
        new_balance REAL NOT NULL,
        bank_notes_breakdown TEXT,
        timestamp TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    );
    CREATE TABLE technician_activities (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        activity_type TEXT NOT NULL,
        amount REAL,
        description TEXT,
        previous_value REAL,
        new_value REAL,
        timestamp TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    );
";

/// Binary under test, with HOME pointed at an empty temp dir so no real
/// config file leaks into the run.
pub fn audit(name: &str) -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_atmaudit_home", name));
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("atmaudit");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_atmaudit.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create the ATM schema and run `seed` against it
pub fn init_db_with(db_path: &str, seed: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.execute_batch(SCHEMA).expect("create schema");
    conn.execute_batch(seed).expect("seed db");
}

/// The store described by the end-to-end acceptance scenario
pub fn init_scenario_db(db_path: &str) {
    init_db_with(
        db_path,
        "INSERT INTO technician_credentials (username, password, full_name, role, created_date)
             VALUES ('tech1', 'pw123', 'Tom Tech', 'technician', '2025-01-01 08:00:00');
         INSERT INTO accounts VALUES ('100001', 'Alice', 2500.00, '4321');
         INSERT INTO atm_state (id, atm_cash, paper_sheets, ink) VALUES (1, 5000.00, 10, 5);",
    );
}

/// Insert `n` deposit rows for account 1001
pub fn populate_transactions(db_path: &str, n: usize) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    for i in 1..=n {
        conn.execute(
            "INSERT INTO transactions (account_number, account_holder, transaction_type,
                 amount, previous_balance, new_balance, timestamp)
             VALUES ('1001', 'John Doe', 'deposit', ?1, 1000.0, 1000.0 + ?1, '2025-05-01 12:00:00')",
            [i as f64],
        )
        .expect("insert transaction");
    }
}

/// Insert `n` cash-refill activity rows
pub fn populate_activities(db_path: &str, n: usize) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    for i in 1..=n {
        conn.execute(
            "INSERT INTO technician_activities (activity_type, amount, description,
                 previous_value, new_value, timestamp)
             VALUES ('REFILL_CASH', ?1, 'Cash refill', 5000.0, 5000.0 + ?1, '2025-06-01 09:00:00')",
            [i as f64 * 100.0],
        )
        .expect("insert activity");
    }
}

/// Lines of one report section, between its title rule and the next section
pub fn section<'a>(stdout: &'a str, title: &str) -> Vec<&'a str> {
    let rule = "=".repeat(80);
    let mut lines = stdout.lines().skip_while(|l| *l != title).skip(2);
    let mut out = Vec::new();
    for l in lines.by_ref() {
        if l.is_empty() || l == rule {
            break;
        }
        out.push(l);
    }
    out
}
