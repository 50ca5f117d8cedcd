use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tenggat_app::{DELETE_PROMPT, Decision, EditOutcome, EventList, FilteredView, TaskBoard, TaskListView};
use tenggat_core::{Clock, format_long_date};
use tenggat_store::KeyValueStore;

use crate::{Command, LsFormat};

/// Execute a non-interactive command against `board`.
///
/// Output goes to `out`; the delete confirmation is read from `input`.
pub fn run<S, C, W, R>(command: Command, board: &mut TaskBoard<S, C, EventList>, out: &mut W, input: &mut R) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    W: Write,
    R: BufRead,
{
    match command {
        Command::Add { text, due } => {
            let id = board.add(&text, &due)?;
            writeln!(out, "added task: {id}")?;
        }
        Command::Ls { date, format } => {
            if let Some(date) = date {
                let view = board.filter_by_date(&date)?;
                match format {
                    LsFormat::Table => render_filtered_table(out, &view)?,
                    LsFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?,
                }
            } else {
                let view = board.render();
                match format {
                    LsFormat::Table => render_task_table(out, &view)?,
                    LsFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?,
                }
            }
        }
        Command::Edit { task, text, due } => {
            let id = board.resolve_id(&task)?;
            match board.edit(id, text.as_deref(), due.as_deref())? {
                EditOutcome::Updated => writeln!(out, "updated task: {id}")?,
                EditOutcome::Aborted => writeln!(out, "edit aborted: text and due date are both required")?,
            }
        }
        Command::Rm { task, yes } => {
            let id = board.resolve_id(&task)?;
            let decision = if yes { Decision::Confirm } else { ask_delete(out, input)? };
            if board.delete(id, decision)? {
                writeln!(out, "deleted task: {id}")?;
            } else {
                writeln!(out, "kept task: {id}")?;
            }
        }
        Command::Done { task } => {
            let id = board.resolve_id(&task)?;
            if board.toggle_completed(id)? {
                writeln!(out, "completed task: {id}")?;
            } else {
                writeln!(out, "reopened task: {id}")?;
            }
        }
        Command::Calendar => {
            writeln!(out, "{}", serde_json::to_string_pretty(board.calendar().events())?)?;
        }
        Command::Tui => bail!("the terminal UI is not a plain command"),
    }
    Ok(())
}

fn ask_delete<W: Write, R: BufRead>(out: &mut W, input: &mut R) -> Result<Decision> {
    write!(out, "{DELETE_PROMPT} [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer).context("failed to read confirmation")?;
    Ok(parse_decision(&answer))
}

fn parse_decision(answer: &str) -> Decision {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "ya" => Decision::Confirm,
        _ => Decision::Decline,
    }
}

fn render_task_table<W: Write>(out: &mut W, view: &TaskListView) -> Result<()> {
    if view.rows.is_empty() {
        writeln!(out, "No tasks found")?;
        return Ok(());
    }
    writeln!(out, "Progress: {}", view.progress)?;
    writeln!(out, "ID | Done | Task | Details")?;
    writeln!(out, "-- | ---- | ---- | -------")?;
    for row in &view.rows {
        writeln!(
            out,
            "{} | {} | {} | {}",
            row.id,
            completion_marker(row.completed),
            row.display_text,
            row.details
        )?;
    }
    Ok(())
}

fn render_filtered_table<W: Write>(out: &mut W, view: &FilteredView) -> Result<()> {
    writeln!(out, "Due on {}", format_long_date(view.date))?;
    if let Some(placeholder) = &view.placeholder {
        writeln!(out, "{placeholder}")?;
        return Ok(());
    }
    writeln!(out, "ID | Task | Details")?;
    writeln!(out, "-- | ---- | -------")?;
    for row in &view.rows {
        writeln!(out, "{} | {} | {}", row.id, row.text, row.details)?;
    }
    Ok(())
}

const fn completion_marker(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use std::io::Cursor;

    use super::*;
    use tenggat_core::{FixedClock, Task, TaskId};
    use tenggat_store::{MemoryStore, TaskRepository};
    use time::OffsetDateTime;
    use time::macros::{date, datetime};

    type Board = TaskBoard<MemoryStore, FixedClock, EventList>;

    const NOW: OffsetDateTime = datetime!(2025-01-12 10:00 +07:00);

    fn board() -> Board {
        board_with(&[])
    }

    /// Board over tasks written straight to the store, bypassing add's checks.
    fn board_with(tasks: &[Task]) -> Board {
        let repo = TaskRepository::new(MemoryStore::new());
        repo.save(tasks).expect("seed tasks");
        TaskBoard::open(repo, FixedClock(NOW), EventList::default()).expect("board must open")
    }

    fn exec(board: &mut Board, command: Command, input: &str) -> Result<String> {
        let mut out = Vec::new();
        run(command, board, &mut out, &mut Cursor::new(input.as_bytes()))?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    fn add(board: &mut Board, text: &str, due: &str) -> TaskId {
        board.add(text, due).expect("add must succeed")
    }

    #[test]
    fn add_prints_new_id() {
        let mut board = board();
        let out = exec(
            &mut board,
            Command::Add {
                text: "Buy milk".into(),
                due: "2025-01-13".into(),
            },
            "",
        )
        .unwrap();
        let id = board.tasks()[0].id;
        assert_eq!(out, format!("added task: {id}\n"));
    }

    #[test]
    fn add_surfaces_validation_message() {
        let mut board = board();
        let err = exec(
            &mut board,
            Command::Add {
                text: String::new(),
                due: "2025-01-13".into(),
            },
            "",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Tolong masukan tugas dan masukan tanggal.");
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn ls_table_lists_rows_with_annotations() {
        let soon = Task::new("soon", date!(2025 - 01 - 12), NOW);
        let mut board = board_with(std::slice::from_ref(&soon));
        add(&mut board, "later", "2025-02-01");
        board.toggle_completed(soon.id).unwrap();

        let out = exec(
            &mut board,
            Command::Ls {
                date: None,
                format: LsFormat::Table,
            },
            "",
        )
        .unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Progress: 1/2");
        assert!(lines[3].contains("[x] | soon (Due today!) | DEADLINE: 12 Januari 2025"));
        assert!(lines[4].contains("[ ] | later | DEADLINE: 1 Februari 2025"));
    }

    #[test]
    fn ls_on_empty_board() {
        let mut board = board();
        let out = exec(
            &mut board,
            Command::Ls {
                date: None,
                format: LsFormat::Table,
            },
            "",
        )
        .unwrap();
        assert_eq!(out, "No tasks found\n");
    }

    #[test]
    fn ls_by_date_shows_placeholder() {
        let mut board = board();
        add(&mut board, "a", "2025-01-20");
        let out = exec(
            &mut board,
            Command::Ls {
                date: Some("2025-01-21".into()),
                format: LsFormat::Table,
            },
            "",
        )
        .unwrap();
        assert_eq!(out, "Due on 21 Januari 2025\nNo tasks due on 21 Januari 2025\n");
    }

    #[test]
    fn ls_json_by_date_uses_iso_dates() {
        let mut board = board();
        add(&mut board, "a", "2025-01-20");
        let out = exec(
            &mut board,
            Command::Ls {
                date: Some("2025-01-20".into()),
                format: LsFormat::Json,
            },
            "",
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["date"], "2025-01-20");
        assert_eq!(value["rows"][0]["text"], "a");
        assert_eq!(value["back_label"], "Kembali ke Daftar Tugas");
    }

    #[test]
    fn rm_asks_before_deleting() {
        let mut board = board();
        let id = add(&mut board, "x", "2025-01-20");

        let out = exec(
            &mut board,
            Command::Rm {
                task: id.to_string(),
                yes: false,
            },
            "n\n",
        )
        .unwrap();
        assert!(out.starts_with(DELETE_PROMPT));
        assert!(out.ends_with(&format!("kept task: {id}\n")));
        assert_eq!(board.tasks().len(), 1);

        exec(
            &mut board,
            Command::Rm {
                task: id.to_string(),
                yes: false,
            },
            "y\n",
        )
        .unwrap();
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn rm_with_yes_skips_prompt() {
        let mut board = board();
        let id = add(&mut board, "x", "2025-01-20");
        let out = exec(
            &mut board,
            Command::Rm {
                task: id.to_string(),
                yes: true,
            },
            "",
        )
        .unwrap();
        assert_eq!(out, format!("deleted task: {id}\n"));
    }

    #[test]
    fn edit_without_due_is_aborted() {
        let mut board = board();
        let id = add(&mut board, "x", "2025-01-20");
        let out = exec(
            &mut board,
            Command::Edit {
                task: id.to_string(),
                text: Some("y".into()),
                due: None,
            },
            "",
        )
        .unwrap();
        assert!(out.starts_with("edit aborted"));
        assert_eq!(board.tasks()[0].text, "x");
    }

    #[test]
    fn done_toggles_back_and_forth() {
        let mut board = board();
        let id = add(&mut board, "x", "2025-01-20");
        let command = || Command::Done { task: id.to_string() };

        assert_eq!(exec(&mut board, command(), "").unwrap(), format!("completed task: {id}\n"));
        assert_eq!(exec(&mut board, command(), "").unwrap(), format!("reopened task: {id}\n"));
    }

    #[test]
    fn calendar_prints_widget_events() {
        let mut board = board();
        add(&mut board, "Rapat", "2025-01-20");
        let out = exec(&mut board, Command::Calendar, "").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"title": "Rapat", "start": "2025-01-20", "color": "#ffc107"}])
        );
    }

    #[test]
    fn unknown_task_is_reported() {
        let mut board = board();
        let err = exec(&mut board, Command::Done { task: "zzzz".into() }, "").unwrap_err();
        assert_eq!(err.to_string(), "Tugas tidak ditemukan: zzzz");
    }

    #[test]
    fn decision_parsing_defaults_to_decline() {
        assert_eq!(parse_decision("y\n"), Decision::Confirm);
        assert_eq!(parse_decision(" YA "), Decision::Confirm);
        assert_eq!(parse_decision(""), Decision::Decline);
        assert_eq!(parse_decision("nope"), Decision::Decline);
    }
}
