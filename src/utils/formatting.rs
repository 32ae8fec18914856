//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

fn plural(count: i64) -> &'static str {
    if count > 1 { "s" } else { "" }
}

/// `150` → `2 hours 30 minutes`, `45` → `45 minutes`, `61` → `1 hour 1 minute`.
///
/// The hour part is omitted when zero; the suffix is plural only above one.
pub fn humanize_minutes(mins: i64) -> String {
    let hours = mins.div_euclid(60);
    let minutes = mins.rem_euclid(60);

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{} hour{} ", hours, plural(hours)));
    }
    out.push_str(&format!("{} minute{}", minutes, plural(minutes)));
    out
}

/// Duration suffix used in the schedule view: `60 mins`, `1 min`.
pub fn minutes_label(mins: i64) -> String {
    if mins > 1 {
        format!("{} mins", mins)
    } else {
        format!("{} min", mins)
    }
}

/// Minutes as decimal hours with two fixed decimals (`90` → `1.50`).
pub fn decimal_hours(mins: i64) -> String {
    format!("{:.2}", mins as f64 / 60.0)
}
