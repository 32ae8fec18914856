use crate::core::calculator::duration::coerce_minutes;
use crate::models::entry::Entry;
use crate::models::schedule::{Schedule, ScheduleItem};

/// Build the forward schedule ending exactly at `end_minutes`.
///
/// The first block starts at `end_minutes - total`; every following block
/// starts where the previous one ended.
pub fn build_schedule(entries: &[Entry], end_minutes: i64) -> Schedule {
    let minutes: Vec<i64> = entries.iter().map(|e| coerce_minutes(&e.duration)).collect();
    let total = minutes.iter().copied().fold(0, i64::saturating_add);
    let adjusted_start = end_minutes.saturating_sub(total);

    let mut cursor = adjusted_start;
    let items = entries
        .iter()
        .zip(minutes)
        .enumerate()
        .map(|(index, (entry, mins))| {
            let start = cursor;
            cursor = cursor.saturating_add(mins);

            ScheduleItem {
                index,
                label: entry.display_label(index),
                minutes: mins,
                start,
                end: cursor,
            }
        })
        .collect();

    Schedule {
        end_minutes,
        total,
        adjusted_start,
        items,
    }
}
