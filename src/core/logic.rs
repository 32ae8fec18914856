use crate::core::calculator::{eod, remaining, schedule};
use crate::models::entry::Entry;
use crate::models::plan_summary::PlanSummary;
use crate::models::view_mode::ViewMode;

pub struct Core;

impl Core {
    pub fn build_summary(
        entries: &[Entry],
        end_minutes: i64,
        now_minutes: i64,
        view: ViewMode,
    ) -> PlanSummary {
        let schedule = schedule::build_schedule(entries, end_minutes);
        let remaining = remaining::calculate_remaining(end_minutes, now_minutes, schedule.total);
        let eod = eod::calculate_eod(&schedule);

        PlanSummary {
            now_minutes,
            remaining,
            schedule,
            eod,
            view,
        }
    }
}
