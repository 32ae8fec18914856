pub mod duration;
pub mod eod;
pub mod remaining;
pub mod schedule;
