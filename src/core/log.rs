use crate::errors::AppResult;
use crate::journal::log::load_log;
use crate::journal::pool::JournalPool;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

/// Maximum visible width of the "operation (target)" column.
const OP_MAX_WIDTH: usize = 60;

/// Returns the ANSI colour for a journal operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "label" | "dur" => Colour::Yellow,
        "move" => Colour::Cyan,
        "end" => Colour::Purple,
        "toggle" => Colour::Blue,
        "export" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the journal as printable lines (empty when nothing was recorded).
    pub fn render_log(pool: &JournalPool) -> AppResult<Vec<String>> {
        let rows = load_log(&pool.conn)?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<(i64, String, String, String, String)> = rows
            .into_iter()
            .map(|r| {
                let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%H:%M:%S").to_string())
                    .unwrap_or(r.date);

                // Single op+target column
                let op_target = if r.target.is_empty() {
                    r.operation.clone()
                } else {
                    format!("{} ({})", r.operation, r.target)
                };

                (r.id, date, r.operation, op_target, r.message)
            })
            .collect();

        let op_w = entries
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);

        let id_w = entries
            .iter()
            .map(|(id, _, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(1);

        let mut lines = Vec::with_capacity(entries.len());

        for (id, date, operation, op_target, message) in entries {
            let color = color_for_operation(&operation);

            // Truncate on visible characters, then re-colour only the operation word
            let visible = strip_ansi(&op_target);
            let truncated = if visible.chars().count() > OP_MAX_WIDTH {
                let mut s = visible.chars().take(OP_MAX_WIDTH - 3).collect::<String>();
                s.push_str("...");
                s
            } else {
                visible
            };

            let recolored = match truncated.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(truncated.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(truncated.chars().count()));

            lines.push(format!(
                "{:>id_w$}: {} | {}{} => {}",
                id,
                date,
                recolored,
                padding,
                message,
                id_w = id_w
            ));
        }

        Ok(lines)
    }

    pub fn print_log(pool: &JournalPool) -> AppResult<()> {
        let lines = Self::render_log(pool)?;

        if lines.is_empty() {
            println!("📜 Session journal is empty.");
            return Ok(());
        }

        println!("📜 Session journal:\n");
        for line in lines {
            println!("{}", line);
        }
        Ok(())
    }
}
