use crate::core::calculator::eod::EodSummary;
use crate::models::schedule::Schedule;
use crate::models::view_mode::ViewMode;

/// Everything the shell needs to render one frame.
#[derive(Debug, Clone, Default)]
pub struct PlanSummary {
    pub now_minutes: i64,
    pub remaining: i64,
    pub schedule: Schedule,
    pub eod: EodSummary,
    pub view: ViewMode,
}

impl PlanSummary {
    pub fn end_minutes(&self) -> i64 {
        self.schedule.end_minutes
    }

    pub fn total(&self) -> i64 {
        self.schedule.total
    }
}
