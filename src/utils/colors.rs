/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Remaining-time color:
/// \>60 → green
/// 1..=60 → yellow
/// 0 → red
pub fn color_for_remaining(mins: i64) -> &'static str {
    if mins > 60 {
        GREEN
    } else if mins > 0 {
        YELLOW
    } else {
        RED
    }
}

/// Grey out placeholder values (blank cells, zero durations), leave the rest untouched.
///
/// `""` becomes a grey `--`, `"0"` is greyed as is.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else if value.trim() == "0" || value.trim() == "0 min" || value.trim() == "0.00" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
