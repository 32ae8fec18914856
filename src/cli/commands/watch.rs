use crate::cli::commands::resolve_plan;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::models::view_mode::ViewMode;
use crate::ui::messages::info;
use crate::ui::render::render_plan;
use crate::utils::time::now_minutes;
use tokio::time::{Duration, MissedTickBehavior, interval};

/// Refresh cadence of the clock, the remaining time and the whole frame.
pub const TICK: Duration = Duration::from_secs(60);

/// Handle the `watch` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { plan, eod, ticks } = cmd {
        let (entries, end_minutes) = resolve_plan(plan, cfg)?;
        let view = if *eod { ViewMode::Eod } else { cfg.default_view };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        runtime.block_on(watch_loop(entries.entries(), end_minutes, view, *ticks));
    }
    Ok(())
}

/// Render immediately, then once per `TICK` until `ticks` frames were shown
/// or Ctrl-C is pressed. The interval is dropped with the loop.
async fn watch_loop(entries: &[Entry], end_minutes: i64, view: ViewMode, ticks: Option<u64>) {
    let mut timer = interval(TICK);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut shown: u64 = 0;

    loop {
        tokio::select! {
            _ = timer.tick() => {
                let summary = Core::build_summary(entries, end_minutes, now_minutes(), view);
                println!();
                print!("{}", render_plan(&summary, entries));
                shown += 1;

                if ticks.is_some_and(|max| shown >= max) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info("Watch stopped.");
                break;
            }
        }
    }
}
