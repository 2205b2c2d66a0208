//! Colored status lines for CLI output.

use std::fmt;

const RESET: &str = "\x1b[0m";

enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn prefix(&self) -> &'static str {
        match self {
            Level::Info => "\x1b[1;34mℹ️",
            Level::Success => "\x1b[1;32m✅",
            Level::Warning => "\x1b[1;33m⚠️",
            Level::Error => "\x1b[1;31m❌",
        }
    }
}

fn emit<T: fmt::Display>(level: Level, msg: T) {
    let line = format!("{} {}{}", level.prefix(), RESET, msg);
    match level {
        Level::Error => eprintln!("{}", line),
        _ => println!("{}", line),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}
