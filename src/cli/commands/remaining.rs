use crate::cli::commands::{resolve_now, resolve_plan};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::duration::total_minutes;
use crate::core::calculator::remaining::calculate_remaining;
use crate::errors::AppResult;
use crate::utils::formatting::humanize_minutes;

/// Handle the `remaining` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Remaining { plan, now } = cmd {
        let (entries, end_minutes) = resolve_plan(plan, cfg)?;
        let now_minutes = resolve_now(now.as_ref())?;

        let total = total_minutes(entries.iter().map(|e| e.duration.as_str()));
        let remaining = calculate_remaining(end_minutes, now_minutes, total);

        println!("{}", humanize_minutes(remaining));
    }
    Ok(())
}
