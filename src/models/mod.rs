pub mod entry;
pub mod plan_summary;
pub mod schedule;
pub mod view_mode;
