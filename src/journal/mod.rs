//! Session journal: an in-memory SQLite database holding one row per edit.
//! Nothing is written to disk; the journal lives as long as the session.

pub mod initialize;
pub mod log;
pub mod pool;
