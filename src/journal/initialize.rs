use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `log` table used by the session journal.
pub fn init_journal(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT NOT NULL DEFAULT '',
            message   TEXT NOT NULL DEFAULT ''
        );",
    )?;
    Ok(())
}
