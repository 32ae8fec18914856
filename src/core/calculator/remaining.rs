/// Free minutes left before the end of shift once all indirect time is taken.
/// Floors at zero.
pub fn calculate_remaining(end_minutes: i64, now_minutes: i64, total: i64) -> i64 {
    end_minutes
        .saturating_sub(now_minutes)
        .saturating_sub(total)
        .max(0)
}
