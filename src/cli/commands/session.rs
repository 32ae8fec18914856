use crate::cli::commands::resolve_plan;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::core::session::{HELP, Outcome, Session, SessionCommand};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::{error, info, warning};
use crate::ui::render::render_plan;
use crate::utils::time::now_minutes;
use std::io::{self, IsTerminal, Write};

/// Handle the `session` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { plan, view } = cmd {
        let (entries, end_minutes) = resolve_plan(plan, cfg)?;
        let mut session = Session::new(entries, end_minutes, view.unwrap_or(cfg.default_view))?;

        let interactive = io::stdin().is_terminal();
        if interactive {
            info("Type `help` for the list of commands, `quit` to leave.");
        }

        // stdin is locked per line: an export overwrite prompt reads from it too
        run_session(&mut session, interactive, |buf| io::stdin().read_line(buf))?;
    }
    Ok(())
}

/// Read-apply-render loop. Ends on `quit` or end of input.
pub fn run_session<F>(session: &mut Session, prompt: bool, mut read_line: F) -> AppResult<()>
where
    F: FnMut(&mut String) -> io::Result<usize>,
{
    print_frame(session);

    let mut line = String::new();
    loop {
        if prompt {
            print!("> ");
            io::stdout().flush().ok();
        }

        line.clear();
        if read_line(&mut line)? == 0 {
            break;
        }

        let cmd = match SessionCommand::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                error(e);
                continue;
            }
        };

        match session.apply(&cmd) {
            Ok(Outcome::Updated { warning: warn }) => {
                if let Some(w) = warn {
                    warning(w);
                }
                print_frame(session);
            }
            Ok(Outcome::Render) => print_frame(session),
            Ok(Outcome::Journal) => {
                if let Err(e) = LogLogic::print_log(session.journal()) {
                    error(e);
                }
            }
            Ok(Outcome::Export {
                format,
                file,
                force,
            }) => {
                let summary = session.summary(now_minutes());
                match ExportLogic::export(&summary, format, &file, force) {
                    Ok(()) => session.record("export", &file, format.as_str()),
                    Err(e) => error(e),
                }
            }
            Ok(Outcome::Help) => println!("{HELP}"),
            Ok(Outcome::Quit) => break,
            Err(e) => error(e),
        }
    }

    let edits = session.journal().count().unwrap_or(0);
    info(format!("Session closed ({edits} journal entries)."));
    Ok(())
}

fn print_frame(session: &Session) {
    let summary = session.summary(now_minutes());
    println!();
    print!("{}", render_plan(&summary, session.entries.entries()));
}
