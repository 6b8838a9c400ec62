//! Database row models for the ATM store.
//! These are thin, read-only snapshots of SQLite rows; timestamps are kept
//! as display strings (see `utils::formatting::render_timestamp`).

#[derive(Debug, Clone, PartialEq)]
pub struct TechnicianCredential {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
    pub role: String,
    pub created_date: Option<String>,
    pub last_login: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub account_number: String,
    pub holder_name: String,
    pub balance: f64,
    pub pin: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MachineState {
    pub cash: f64,
    pub paper_sheets: i64,
    pub ink_units: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub account_number: String,
    pub account_holder: String,
    pub transaction_type: String,
    pub amount: f64,
    pub previous_balance: f64,
    pub new_balance: f64,
    pub timestamp: Option<String>,
}

/// Configuration changes carry no monetary delta, hence the optional values.
#[derive(Debug, Clone, PartialEq)]
pub struct TechnicianActivity {
    pub id: i64,
    pub activity_type: String,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub previous_value: Option<f64>,
    pub new_value: Option<f64>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BankNote {
    pub denomination: i64,
    pub quantity: i64,
}
