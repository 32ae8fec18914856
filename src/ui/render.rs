//! Text rendering of a plan: header, entry table, totals and the summary block.

use crate::models::entry::Entry;
use crate::models::plan_summary::PlanSummary;
use crate::models::view_mode::ViewMode;
use crate::utils::colors::{CYAN, MAGENTA, color_for_remaining, colorize_optional, paint};
use crate::utils::formatting::{
    bold, decimal_hours, humanize_minutes, minutes_label, pad_right,
};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_clock;

const KEY_WIDTH: usize = 17;

fn key_value(key: &str, value: &str) -> String {
    format!("{}{}\n", pad_right(&format!("{key}:"), KEY_WIDTH), value)
}

/// Full frame: everything the original widget showed at once.
pub fn render_plan(summary: &PlanSummary, entries: &[Entry]) -> String {
    let mut out = String::new();

    out.push_str(&bold("Indirect Scheduler"));
    out.push('\n');
    out.push_str(&render_clock_lines(summary));
    out.push('\n');

    out.push_str(&render_entries(entries));
    out.push('\n');

    out.push_str(&key_value(
        "Total indirect",
        &paint(&humanize_minutes(summary.total()), MAGENTA),
    ));
    out.push('\n');

    out.push_str(&render_view(summary));
    out
}

/// End shift, current time and remaining time.
pub fn render_clock_lines(summary: &PlanSummary) -> String {
    let mut out = String::new();
    out.push_str(&key_value("End shift", &format_clock(summary.end_minutes())));
    out.push_str(&key_value("Current time", &format_clock(summary.now_minutes)));
    out.push_str(&key_value(
        "Remaining time",
        &paint(
            &humanize_minutes(summary.remaining),
            color_for_remaining(summary.remaining),
        ),
    ));
    out
}

/// Numbered entry table, exactly as stored (raw durations).
pub fn render_entries(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No indirect entries. Use `add` to create one.\n".to_string();
    }

    let mut table = Table::new(vec![
        Column::new(" #", 3),
        Column::new("Label", 11),
        Column::new("Minutes", 7),
    ]);

    for (i, e) in entries.iter().enumerate() {
        table.add_row(vec![
            format!("{:>2}", i + 1),
            colorize_optional(&e.label),
            colorize_optional(&e.duration),
        ]);
    }

    table.render()
}

/// Schedule or EOD block depending on the view mode.
pub fn render_view(summary: &PlanSummary) -> String {
    let mut out = String::new();
    out.push_str(&paint(summary.view.title(), CYAN));
    out.push('\n');

    match summary.view {
        ViewMode::Schedule => {
            for item in &summary.schedule.items {
                out.push_str(&format!(
                    "{}: {} - {} ({})\n",
                    item.label,
                    item.start_clock(),
                    item.end_clock(),
                    minutes_label(item.minutes)
                ));
            }
        }
        ViewMode::Eod => {
            for row in &summary.eod.rows {
                out.push_str(&format!("{}: {}\n", row.label, decimal_hours(row.minutes)));
            }
            out.push_str(&format!("Prod: {:.2}\n", summary.eod.prod_hours));
        }
    }

    out
}
