use crate::utils::time::format_clock;
use serde::Serialize;

/// One scheduled block. `start`/`end` are minutes since midnight and are
/// not normalized into a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleItem {
    pub index: usize,
    pub label: String,
    pub minutes: i64,
    pub start: i64,
    pub end: i64,
}

impl ScheduleItem {
    pub fn start_clock(&self) -> String {
        format_clock(self.start)
    }

    pub fn end_clock(&self) -> String {
        format_clock(self.end)
    }
}

/// Forward schedule worked out backward from the end of shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub end_minutes: i64,
    pub total: i64,
    pub adjusted_start: i64,
    pub items: Vec<ScheduleItem>,
}
