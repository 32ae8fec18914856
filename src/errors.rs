//! Unified application error type.
//! All modules (core, cli, export, journal) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Session journal
    // ---------------------------
    #[error("Journal error: {0}")]
    Journal(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid entry: {0} (expected LABEL=MINUTES)")]
    InvalidEntry(String),

    #[error("Unknown or malformed command: {0}")]
    InvalidCommand(String),

    // ---------------------------
    // Entry list errors
    // ---------------------------
    #[error("Entry index {index} is out of range (list has {len} entries)")]
    InvalidIndex { index: usize, len: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
