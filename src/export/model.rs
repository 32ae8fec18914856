// src/export/model.rs

use crate::models::plan_summary::PlanSummary;
use crate::utils::formatting::decimal_hours;
use crate::utils::time::{format_clock, format_minutes};
use serde::Serialize;

/// Flat row for the schedule export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ScheduleExport {
    pub position: usize,
    pub label: String,
    pub minutes: i64,
    pub hours: String,
    pub start: String,
    pub end: String,
}

impl ScheduleExport {
    /// Columns written as numbers in spreadsheet exports; every other column is text.
    pub const NUMERIC_COLUMNS: [&'static str; 3] = ["position", "minutes", "hours"];

    pub fn is_numeric_column(header: &str) -> bool {
        Self::NUMERIC_COLUMNS.contains(&header)
    }
}

/// Whole-plan document written by the JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct PlanExport {
    pub end_time: String,
    pub total: i64,
    pub adjusted_start: String,
    pub prod: String,
    pub rows: Vec<ScheduleExport>,
}

impl PlanExport {
    pub fn from_summary(summary: &PlanSummary) -> Self {
        Self {
            end_time: format_minutes(summary.end_minutes()),
            total: summary.total(),
            adjusted_start: format_clock(summary.schedule.adjusted_start),
            prod: format!("{:.2}", summary.eod.prod_hours),
            rows: rows_from_summary(summary),
        }
    }
}

pub(crate) fn rows_from_summary(summary: &PlanSummary) -> Vec<ScheduleExport> {
    summary
        .schedule
        .items
        .iter()
        .map(|item| ScheduleExport {
            position: item.index + 1,
            label: item.label.clone(),
            minutes: item.minutes,
            hours: decimal_hours(item.minutes),
            start: item.start_clock(),
            end: item.end_clock(),
        })
        .collect()
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["position", "label", "minutes", "hours", "start", "end"]
}

pub(crate) fn row_to_cells(r: &ScheduleExport) -> Vec<String> {
    vec![
        r.position.to_string(),
        r.label.clone(),
        r.minutes.to_string(),
        r.hours.clone(),
        r.start.clone(),
        r.end.clone(),
    ]
}
