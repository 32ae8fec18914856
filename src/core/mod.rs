pub mod calculator;
pub mod entries;
pub mod log;
pub mod logic;
pub mod session;
