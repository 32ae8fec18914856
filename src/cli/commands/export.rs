use crate::cli::commands::{resolve_now, resolve_plan};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        plan,
        format,
        file,
        force,
    } = cmd
    {
        let (entries, end_minutes) = resolve_plan(plan, cfg)?;
        let summary = Core::build_summary(
            entries.entries(),
            end_minutes,
            resolve_now(None)?,
            cfg.default_view,
        );

        ExportLogic::export(&summary, *format, file, *force)?;
    }
    Ok(())
}
