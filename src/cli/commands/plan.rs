use crate::cli::commands::{resolve_now, resolve_plan};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::view_mode::ViewMode;
use crate::ui::render::render_plan;

/// Handle the `plan` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan { plan, eod, now } = cmd {
        let (entries, end_minutes) = resolve_plan(plan, cfg)?;
        let now_minutes = resolve_now(now.as_ref())?;

        let view = if *eod { ViewMode::Eod } else { cfg.default_view };

        let summary = Core::build_summary(entries.entries(), end_minutes, now_minutes, view);
        print!("{}", render_plan(&summary, entries.entries()));
    }
    Ok(())
}
