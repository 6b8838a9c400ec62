//! Diagnostic messages. Everything here goes to stderr so that stdout
//! carries nothing but report text.

use std::fmt;
use std::io::{self, IsTerminal};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

fn emit<T: fmt::Display>(color: &str, tag: &str, msg: T) {
    if io::stderr().is_terminal() {
        eprintln!("{}{}{}{} {}", color, BOLD, tag, RESET, msg);
    } else {
        eprintln!("{} {}", tag, msg);
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(FG_BLUE, "[info]", msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(FG_GREEN, "[ok]", msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(FG_YELLOW, "[warn]", msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(FG_RED, "[error]", msg);
}
