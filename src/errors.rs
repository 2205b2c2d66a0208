//! Unified application error type.
//! All modules (db, cli, export, utils) return AppError to keep error
//! handling consistent across the binary. The core engine itself is
//! fail-soft and never produces errors (see core/*).

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid punch kind: {0}")]
    InvalidPunchKind(String),

    #[error("Invalid irregularity kind: {0}")]
    InvalidIrregularityKind(String),

    // ---------------------------
    // Roster errors
    // ---------------------------
    #[error("Unknown employee: {0}")]
    UnknownEmployee(String),

    #[error("Unknown department: {0}")]
    UnknownDepartment(String),

    #[error("Duplicate code: {0}")]
    DuplicateCode(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
