pub mod config;
pub mod export;
pub mod init;
pub mod plan;
pub mod remaining;
pub mod session;
pub mod watch;

use crate::cli::parser::PlanArgs;
use crate::config::Config;
use crate::core::entries::EntryList;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{now_minutes, parse_minutes, parse_optional_minutes};

/// Entries and end of shift for a command: CLI flags first, configuration otherwise.
///
/// `--entry` values go through the same edits a user would make, so labels
/// are capitalized and durations stored raw.
pub(crate) fn resolve_plan(args: &PlanArgs, cfg: &Config) -> AppResult<(EntryList, i64)> {
    let end_minutes = match &args.end {
        Some(end) => parse_minutes(end)?,
        None => parse_minutes(&cfg.end_time)
            .map_err(|_| AppError::Config(format!("invalid end_time '{}'", cfg.end_time)))?,
    };

    if args.entries.is_empty() {
        return Ok((cfg.seed_entries(), end_minutes));
    }

    let mut list = EntryList::new();
    for raw in &args.entries {
        let (label, minutes) = raw
            .split_once('=')
            .ok_or_else(|| AppError::InvalidEntry(raw.clone()))?;

        let idx = list.add();
        list.update_label(idx, label.trim())?;
        list.update_duration(idx, minutes.trim())?;
    }

    Ok((list, end_minutes))
}

/// `--now` override or the local wall clock.
pub(crate) fn resolve_now(now: Option<&String>) -> AppResult<i64> {
    Ok(parse_optional_minutes(now)?.unwrap_or_else(now_minutes))
}
