//! SQLite connection wrapper for the session journal.

use crate::errors::AppResult;
use crate::journal::initialize::init_journal;
use rusqlite::Connection;

pub struct JournalPool {
    pub conn: Connection,
}

impl JournalPool {
    /// Open a fresh in-memory journal with its schema in place.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_journal(&conn)?;
        Ok(Self { conn })
    }

    /// Number of rows recorded so far.
    pub fn count(&self) -> AppResult<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
        Ok(n)
    }
}
