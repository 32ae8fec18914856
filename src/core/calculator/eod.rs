//! End-of-day view: indirect time in decimal hours plus productive hours.

use crate::models::schedule::Schedule;
use serde::Serialize;

/// Reference shift length used for the "Prod" line (9 hours).
/// Not derived from the configured end time.
pub const REFERENCE_SHIFT_MINUTES: i64 = 540;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EodRow {
    pub label: String,
    pub minutes: i64,
    pub hours: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EodSummary {
    pub rows: Vec<EodRow>,
    pub total: i64,
    pub prod_hours: f64,
}

pub fn calculate_eod(schedule: &Schedule) -> EodSummary {
    let rows = schedule
        .items
        .iter()
        .map(|item| EodRow {
            label: item.label.clone(),
            minutes: item.minutes,
            hours: item.minutes as f64 / 60.0,
        })
        .collect();

    EodSummary {
        rows,
        total: schedule.total,
        prod_hours: prod_hours(schedule.total),
    }
}

pub fn prod_hours(total: i64) -> f64 {
    REFERENCE_SHIFT_MINUTES.saturating_sub(total) as f64 / 60.0
}
