//! Interactive planning session: the editable state plus the line commands
//! that drive it.

use crate::core::calculator::duration::is_numeric;
use crate::core::entries::EntryList;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::journal::log::ttlog;
use crate::journal::pool::JournalPool;
use crate::models::plan_summary::PlanSummary;
use crate::models::view_mode::ViewMode;
use crate::ui::messages::warning;
use crate::utils::time::{format_minutes, parse_minutes};

/// One parsed session line. Row indices are already 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Add,
    Label { index: usize, text: String },
    Dur { index: usize, value: String },
    Del { index: usize },
    Move { from: usize, to: usize },
    End(String),
    Toggle,
    Show,
    Log,
    Export { format: ExportFormat, file: String, force: bool },
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands (rows are numbered from 1):
  add                    append an empty row
  label N TEXT           set the label of row N (max 10 chars)
  dur N MINUTES          set the duration of row N
  del N                  delete row N
  move FROM TO           move row FROM to position TO
  end HH:MM              set the end of shift (24h)
  toggle                 switch between Schedule and EOD view
  show                   render the plan again
  log                    print the session journal
  export FORMAT FILE [--force]   write the plan (csv, json, xlsx)
  help                   this help
  quit                   leave the session";

/// Split off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim_start()),
        None => (s, ""),
    }
}

/// Convert a 1-based row number typed by the user to an index.
fn parse_row(word: &str, line: &str) -> AppResult<usize> {
    let row: usize = word
        .parse()
        .map_err(|_| AppError::InvalidCommand(format!("'{line}': '{word}' is not a row number")))?;

    row.checked_sub(1)
        .ok_or_else(|| AppError::InvalidCommand(format!("'{line}': rows are numbered from 1")))
}

impl SessionCommand {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = split_word(trimmed);

        let cmd = match word.to_ascii_lowercase().as_str() {
            "add" => SessionCommand::Add,
            "label" => {
                let (row, text) = split_word(rest);
                SessionCommand::Label {
                    index: parse_row(row, trimmed)?,
                    text: text.to_string(),
                }
            }
            "dur" => {
                let (row, value) = split_word(rest);
                SessionCommand::Dur {
                    index: parse_row(row, trimmed)?,
                    value: value.to_string(),
                }
            }
            "del" => {
                let (row, _) = split_word(rest);
                SessionCommand::Del {
                    index: parse_row(row, trimmed)?,
                }
            }
            "move" => {
                let (from, rest) = split_word(rest);
                let (to, _) = split_word(rest);
                SessionCommand::Move {
                    from: parse_row(from, trimmed)?,
                    to: parse_row(to, trimmed)?,
                }
            }
            "end" => {
                if rest.is_empty() {
                    return Err(AppError::InvalidCommand(format!(
                        "'{trimmed}': missing HH:MM"
                    )));
                }
                SessionCommand::End(rest.to_string())
            }
            "toggle" => SessionCommand::Toggle,
            "show" => SessionCommand::Show,
            "log" => SessionCommand::Log,
            "export" => {
                let (fmt, rest) = split_word(rest);
                let format = ExportFormat::from_name(fmt).ok_or_else(|| {
                    AppError::InvalidCommand(format!("'{trimmed}': unknown export format '{fmt}'"))
                })?;

                let (file, rest) = split_word(rest);
                if file.is_empty() {
                    return Err(AppError::InvalidCommand(format!(
                        "'{trimmed}': missing output file"
                    )));
                }
                let force = matches!(split_word(rest).0, "--force" | "-f" | "force");

                SessionCommand::Export {
                    format,
                    file: file.to_string(),
                    force,
                }
            }
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            _ => return Err(AppError::InvalidCommand(trimmed.to_string())),
        };

        Ok(Some(cmd))
    }

    /// True for commands that change the plan.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            SessionCommand::Add
                | SessionCommand::Label { .. }
                | SessionCommand::Dur { .. }
                | SessionCommand::Del { .. }
                | SessionCommand::Move { .. }
                | SessionCommand::End(_)
                | SessionCommand::Toggle
        )
    }
}

/// What the shell should do after a command was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed: re-render. Carries an optional non-blocking warning.
    Updated { warning: Option<String> },
    Render,
    Journal,
    Export { format: ExportFormat, file: String, force: bool },
    Help,
    Quit,
}

pub struct Session {
    pub entries: EntryList,
    pub view: ViewMode,
    end_minutes: i64,
    journal: JournalPool,
}

impl Session {
    pub fn new(entries: EntryList, end_minutes: i64, view: ViewMode) -> AppResult<Self> {
        Ok(Self {
            entries,
            view,
            end_minutes,
            journal: JournalPool::in_memory()?,
        })
    }

    pub fn end_minutes(&self) -> i64 {
        self.end_minutes
    }

    pub fn end_time(&self) -> String {
        format_minutes(self.end_minutes)
    }

    /// Change the end of shift; the previous value is kept on error.
    pub fn set_end_time(&mut self, value: &str) -> AppResult<()> {
        self.end_minutes = parse_minutes(value)?;
        Ok(())
    }

    pub fn journal(&self) -> &JournalPool {
        &self.journal
    }

    pub fn summary(&self, now_minutes: i64) -> PlanSummary {
        Core::build_summary(self.entries.entries(), self.end_minutes, now_minutes, self.view)
    }

    pub fn apply(&mut self, cmd: &SessionCommand) -> AppResult<Outcome> {
        let mut warn = None;

        let (op, target, message) = match cmd {
            SessionCommand::Add => {
                let idx = self.entries.add();
                ("add", row_target(idx), "empty row appended".to_string())
            }
            SessionCommand::Label { index, text } => {
                let entry = self.entries.update_label(*index, text)?;
                ("label", row_target(*index), format!("label = '{}'", entry.label))
            }
            SessionCommand::Dur { index, value } => {
                self.entries.update_duration(*index, value)?;
                if !is_numeric(value) {
                    warn = Some(format!("'{value}' is not a number: it counts as 0 minutes"));
                }
                ("dur", row_target(*index), format!("minutes = '{value}'"))
            }
            SessionCommand::Del { index } => {
                let removed = self.entries.delete(*index)?;
                (
                    "del",
                    row_target(*index),
                    format!("removed '{}' ({})", removed.label, removed.duration),
                )
            }
            SessionCommand::Move { from, to } => {
                self.entries.move_entry(*from, *to)?;
                (
                    "move",
                    format!("{} -> {}", from + 1, to + 1),
                    "row moved".to_string(),
                )
            }
            SessionCommand::End(value) => {
                self.set_end_time(value)?;
                ("end", String::new(), format!("end of shift = {}", self.end_time()))
            }
            SessionCommand::Toggle => {
                self.view = self.view.toggle();
                ("toggle", String::new(), format!("view = {}", self.view.as_str()))
            }
            SessionCommand::Show => return Ok(Outcome::Render),
            SessionCommand::Log => return Ok(Outcome::Journal),
            SessionCommand::Export {
                format,
                file,
                force,
            } => {
                return Ok(Outcome::Export {
                    format: *format,
                    file: file.clone(),
                    force: *force,
                });
            }
            SessionCommand::Help => return Ok(Outcome::Help),
            SessionCommand::Quit => return Ok(Outcome::Quit),
        };

        self.record(op, &target, &message);

        Ok(Outcome::Updated { warning: warn })
    }

    /// Journal a line; failures never abort the session.
    pub fn record(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.journal.conn, operation, target, message) {
            warning(format!("Failed to write session journal: {}", e));
        }
    }
}

fn row_target(index: usize) -> String {
    format!("row {}", index + 1)
}
