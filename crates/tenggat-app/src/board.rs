//! The task board: owner of the in-memory collection.
//!
//! Every mutation follows the same path: validate, apply to a copy, sort by
//! due date, persist the whole collection, then swap the copy in and resync the
//! calendar. A failed write therefore leaves the board exactly as it was.

use tenggat_core::{Clock, SystemClock, Task, TaskId, parse_due_date, sort_by_due};
use tenggat_store::{KeyValueStore, TaskRepository};
use time::Date;
use tracing::{debug, info};

use crate::calendar::{CalendarSink, EventList, sync_calendar};
use crate::error::{BoardError, BoardResult};
use crate::view::{FilteredView, Progress, TaskListView, render_filtered, render_list};

/// Which list the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Every task, sorted by due date.
    All,
    /// Read-only view of the tasks due on one date.
    ByDate(Date),
}

/// Rendered form of the current [`ViewMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardView {
    /// Full list.
    All(TaskListView),
    /// By-date view.
    ByDate(FilteredView),
}

/// Answer of a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Go ahead.
    Confirm,
    /// Leave things as they are.
    Decline,
}

/// Result of an edit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Text and due date were replaced.
    Updated,
    /// The dialog was dismissed or a field was left empty; nothing changed.
    Aborted,
}

/// Explicit store object owning the task collection.
pub struct TaskBoard<S, C = SystemClock, K = EventList> {
    repository: TaskRepository<S>,
    clock: C,
    calendar: K,
    tasks: Vec<Task>,
    mode: ViewMode,
}

impl<S, C, K> TaskBoard<S, C, K>
where
    S: KeyValueStore,
    C: Clock,
    K: CalendarSink,
{
    /// Load the collection from `repository` and populate `calendar`.
    ///
    /// # Errors
    /// Returns [`BoardError::Storage`] when the store cannot be read. An absent
    /// or unparsable blob is not an error and yields an empty board.
    pub fn open(repository: TaskRepository<S>, clock: C, calendar: K) -> BoardResult<Self> {
        let mut tasks = repository.load()?;
        sort_by_due(&mut tasks);
        let mut board = Self {
            repository,
            clock,
            calendar,
            tasks,
            mode: ViewMode::All,
        };
        board.resync_calendar();
        info!(count = board.tasks.len(), "Opened task board");
        Ok(board)
    }

    /// Tasks in due-date order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Resolve a full id or a unique id prefix.
    ///
    /// # Errors
    /// Returns [`BoardError::NotFound`] when nothing matches and
    /// [`BoardError::AmbiguousId`] when several tasks share the prefix.
    pub fn resolve_id(&self, input: &str) -> BoardResult<TaskId> {
        if let Ok(id) = input.parse::<TaskId>() {
            return self
                .get(id)
                .map(|task| task.id)
                .ok_or_else(|| BoardError::NotFound(input.to_owned()));
        }
        let matches: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|task| task.id.matches_prefix(input))
            .map(|task| task.id)
            .collect();
        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(BoardError::NotFound(input.to_owned())),
            _ => Err(BoardError::AmbiguousId(input.to_owned())),
        }
    }

    /// Add a task due on `due` (`YYYY-MM-DD`).
    ///
    /// # Errors
    /// Fails without touching the board when the text or date is empty, the
    /// date does not parse, a task with the same text and date exists, the
    /// start of the due day lies before the current instant, or the store
    /// rejects the write.
    pub fn add(&mut self, text: &str, due: &str) -> BoardResult<TaskId> {
        let text = text.trim();
        if text.is_empty() || due.trim().is_empty() {
            return Err(BoardError::MissingInput);
        }
        let date_due = parse_due_date(due)?;
        if self.tasks.iter().any(|task| task.is_duplicate_of(text, date_due)) {
            return Err(BoardError::Duplicate);
        }
        let now = self.clock.now();
        if date_due.midnight().assume_offset(now.offset()) < now {
            return Err(BoardError::PastDue);
        }

        let task = Task::new(text, date_due, now);
        let id = task.id;
        let mut next = self.tasks.clone();
        next.push(task);
        self.commit(next)?;
        info!(%id, due = %date_due, "Added task");
        Ok(id)
    }

    /// Replace the text and due date of a task and refresh its timestamp.
    ///
    /// `None` stands for a dismissed dialog field. A dismissed or empty field
    /// aborts the whole edit.
    ///
    /// # Errors
    /// Returns [`BoardError::NotFound`] for an unknown id,
    /// [`BoardError::InvalidDate`] for a malformed date, and
    /// [`BoardError::Storage`] when the write fails.
    pub fn edit(&mut self, id: TaskId, text: Option<&str>, due: Option<&str>) -> BoardResult<EditOutcome> {
        let index = self.position(id)?;
        let (Some(text), Some(due)) = (text.map(str::trim), due.map(str::trim)) else {
            debug!(%id, "Edit dismissed");
            return Ok(EditOutcome::Aborted);
        };
        if text.is_empty() || due.is_empty() {
            debug!(%id, "Edit aborted on empty field");
            return Ok(EditOutcome::Aborted);
        }
        let date_due = parse_due_date(due)?;

        let mut next = self.tasks.clone();
        if let Some(task) = next.get_mut(index) {
            text.clone_into(&mut task.text);
            task.date_due = date_due;
            task.date_time = self.clock.now();
        }
        self.commit(next)?;
        info!(%id, due = %date_due, "Edited task");
        Ok(EditOutcome::Updated)
    }

    /// Delete a task once the user confirmed. Returns whether it was removed.
    ///
    /// # Errors
    /// Returns [`BoardError::NotFound`] for an unknown id and
    /// [`BoardError::Storage`] when the write fails.
    pub fn delete(&mut self, id: TaskId, decision: Decision) -> BoardResult<bool> {
        let index = self.position(id)?;
        if decision == Decision::Decline {
            debug!(%id, "Delete declined");
            return Ok(false);
        }
        let mut next = self.tasks.clone();
        next.remove(index);
        self.commit(next)?;
        info!(%id, "Deleted task");
        Ok(true)
    }

    /// Flip the completed flag. Returns the new value.
    ///
    /// # Errors
    /// Returns [`BoardError::NotFound`] for an unknown id and
    /// [`BoardError::Storage`] when the write fails.
    pub fn toggle_completed(&mut self, id: TaskId) -> BoardResult<bool> {
        let index = self.position(id)?;
        let mut next = self.tasks.clone();
        let mut completed = false;
        if let Some(task) = next.get_mut(index) {
            task.completed = !task.completed;
            completed = task.completed;
        }
        self.commit(next)?;
        info!(%id, completed, "Toggled task");
        Ok(completed)
    }

    /// Re-read the collection from the store, discarding the in-memory copy.
    ///
    /// # Errors
    /// Returns [`BoardError::Storage`] when the store cannot be read.
    pub fn reload(&mut self) -> BoardResult<()> {
        let mut tasks = self.repository.load()?;
        sort_by_due(&mut tasks);
        self.tasks = tasks;
        self.mode = ViewMode::All;
        self.resync_calendar();
        Ok(())
    }

    /// Switch to the read-only view of tasks due on `date` (`YYYY-MM-DD`).
    ///
    /// Neither the collection nor the store is touched.
    ///
    /// # Errors
    /// Returns [`BoardError::InvalidDate`] when `date` does not parse.
    pub fn filter_by_date(&mut self, date: &str) -> BoardResult<FilteredView> {
        let date = parse_due_date(date)?;
        self.mode = ViewMode::ByDate(date);
        Ok(render_filtered(&self.tasks, date))
    }

    /// Back action of the by-date view.
    pub fn show_all(&mut self) -> TaskListView {
        self.mode = ViewMode::All;
        self.render()
    }

    /// Current view mode.
    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Full list as of the clock's current day.
    #[must_use]
    pub fn render(&self) -> TaskListView {
        render_list(&self.tasks, self.clock.today())
    }

    /// Render whatever the current mode shows.
    #[must_use]
    pub fn current_view(&self) -> BoardView {
        match self.mode {
            ViewMode::All => BoardView::All(self.render()),
            ViewMode::ByDate(date) => BoardView::ByDate(render_filtered(&self.tasks, date)),
        }
    }

    /// Counter over the full collection, whatever the view mode.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::of(&self.tasks)
    }

    /// The calendar sink.
    #[must_use]
    pub const fn calendar(&self) -> &K {
        &self.calendar
    }

    /// The session clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// The backing key-value store.
    #[must_use]
    pub const fn store(&self) -> &S {
        self.repository.store()
    }

    /// Storage key the board writes to.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        self.repository.key()
    }

    /// Recompute calendar colors against the current day.
    pub fn resync_calendar(&mut self) {
        let today = self.clock.today();
        sync_calendar(&mut self.calendar, &self.tasks, today);
    }

    fn position(&self, id: TaskId) -> BoardResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| BoardError::NotFound(id.to_string()))
    }

    fn commit(&mut self, mut next: Vec<Task>) -> BoardResult<()> {
        sort_by_due(&mut next);
        self.repository.save(&next)?;
        self.tasks = next;
        self.mode = ViewMode::All;
        self.resync_calendar();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenggat_core::{FixedClock, Rgb, Urgency, is_sorted_by_due};
    use tenggat_store::{DEFAULT_KEY, MemoryStore};
    use time::macros::{date, datetime};

    type Board = TaskBoard<MemoryStore, FixedClock, EventList>;

    fn board() -> Board {
        board_at(datetime!(2025-01-12 10:00 +07:00))
    }

    fn board_at(now: time::OffsetDateTime) -> Board {
        let repo = TaskRepository::new(MemoryStore::new());
        match TaskBoard::open(repo, FixedClock(now), EventList::default()) {
            Ok(board) => board,
            Err(err) => panic!("board must open: {err}"),
        }
    }

    fn stored(board: &Board) -> Vec<Task> {
        let blob = board
            .repository
            .store()
            .get(DEFAULT_KEY)
            .ok()
            .flatten()
            .unwrap_or_else(|| panic!("blob must exist"));
        serde_json::from_str(&blob).unwrap_or_else(|err| panic!("blob must parse: {err}"))
    }

    #[test]
    fn add_to_empty_board_persists_one_open_task() -> BoardResult<()> {
        let mut board = board();
        let id = board.add("  Buy milk ", "2025-01-13")?;

        assert_eq!(board.tasks().len(), 1);
        let persisted = stored(&board);
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].id, id);
        assert_eq!(persisted[0].text, "Buy milk");
        assert!(!persisted[0].completed);
        assert_eq!(persisted[0].date_time, datetime!(2025-01-12 10:00 +07:00));
        Ok(())
    }

    #[test]
    fn add_rejects_missing_input_without_change() {
        let mut board = board();
        for (text, due) in [("", "2025-01-13"), ("   ", "2025-01-13"), ("x", ""), ("x", "  ")] {
            let err = board.add(text, due).err();
            assert!(matches!(err, Some(BoardError::MissingInput)), "{text:?}/{due:?}");
        }
        assert!(board.tasks().is_empty());
        assert!(board.repository.store().is_empty());
    }

    #[test]
    fn add_rejects_past_dates() {
        let mut board = board();
        let err = board.add("X", "2020-01-01").err();
        assert!(matches!(err, Some(BoardError::PastDue)));
        assert_eq!(
            err.map(|e| e.to_string()).as_deref(),
            Some("Tanggal jatuh tempo tidak boleh di masa lalu.")
        );
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn add_compares_the_start_of_the_due_day_with_now() -> BoardResult<()> {
        let mut board = board();
        assert!(matches!(board.add("Hari ini", "2025-01-12"), Err(BoardError::PastDue)));
        assert!(board.tasks().is_empty());

        let mut midnight = board_at(datetime!(2025-01-12 00:00 +07:00));
        midnight.add("Tepat tengah malam", "2025-01-12")?;
        assert_eq!(midnight.tasks()[0].urgency(midnight.clock().today()), Urgency::Today);

        let mut late = board_at(datetime!(2025-01-12 23:59:59 +07:00));
        late.add("Besok", "2025-01-13")?;
        assert_eq!(late.tasks().len(), 1);
        Ok(())
    }

    #[test]
    fn add_rejects_duplicates() -> BoardResult<()> {
        let mut board = board();
        board.add("X", "2025-01-20")?;
        let err = board.add(" X ", "2025-01-20").err();
        assert!(matches!(err, Some(BoardError::Duplicate)));
        assert_eq!(board.tasks().len(), 1);

        board.add("X", "2025-01-21")?;
        assert_eq!(board.tasks().len(), 2);
        Ok(())
    }

    #[test]
    fn add_rejects_malformed_dates() {
        let mut board = board();
        let err = board.add("X", "13/01/2025").err();
        assert!(matches!(err, Some(BoardError::InvalidDate(_))));
        assert!(err.is_some_and(|e| e.is_validation()));
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn collection_stays_sorted_regardless_of_insertion_order() -> BoardResult<()> {
        let mut board = board();
        for due in ["2025-03-01", "2025-01-15", "2025-02-10", "2025-01-13"] {
            board.add(&format!("due {due}"), due)?;
        }
        assert!(is_sorted_by_due(board.tasks()));
        assert!(is_sorted_by_due(&stored(&board)));
        let first = board.render().rows.into_iter().next().map(|row| row.text);
        assert_eq!(first.as_deref(), Some("due 2025-01-13"));
        Ok(())
    }

    #[test]
    fn edit_replaces_fields_and_resorts() -> BoardResult<()> {
        let mut board = board();
        let a = board.add("a", "2025-01-13")?;
        board.add("b", "2025-01-20")?;

        let outcome = board.edit(a, Some(" a2 "), Some("2025-02-01"))?;
        assert_eq!(outcome, EditOutcome::Updated);

        let texts: Vec<_> = board.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "a2"]);
        assert_eq!(board.get(a).map(|t| t.date_due), Some(date!(2025 - 02 - 01)));
        assert_eq!(stored(&board), board.tasks());
        Ok(())
    }

    #[test]
    fn edit_aborts_on_dismissed_or_empty_fields() -> BoardResult<()> {
        let mut board = board();
        let id = board.add("keep", "2025-01-20")?;
        let before = board.tasks().to_vec();

        for (text, due) in [
            (None, Some("2025-02-01")),
            (Some("new"), None),
            (Some(" "), Some("2025-02-01")),
            (Some("new"), Some("")),
        ] {
            assert_eq!(board.edit(id, text, due)?, EditOutcome::Aborted);
        }
        assert_eq!(board.tasks(), before.as_slice());
        assert_eq!(stored(&board), before);
        Ok(())
    }

    #[test]
    fn delete_requires_confirmation() -> BoardResult<()> {
        let mut board = board();
        let id = board.add("x", "2025-01-20")?;

        assert!(!board.delete(id, Decision::Decline)?);
        assert_eq!(board.tasks().len(), 1);

        assert!(board.delete(id, Decision::Confirm)?);
        assert!(board.tasks().is_empty());
        assert!(stored(&board).is_empty());
        assert!(matches!(board.delete(id, Decision::Confirm), Err(BoardError::NotFound(_))));
        Ok(())
    }

    #[test]
    fn toggle_updates_progress_and_calendar() -> BoardResult<()> {
        let mut board = board();
        let id = board.add("x", "2025-01-20")?;
        board.add("y", "2025-01-21")?;
        assert_eq!(board.progress().to_string(), "0/2");
        assert_eq!(board.calendar().events()[0].color, Rgb::AMBER);

        assert!(board.toggle_completed(id)?);
        assert_eq!(board.progress().to_string(), "1/2");
        assert_eq!(board.calendar().events()[0].color, Rgb::COMPLETED);
        assert!(stored(&board)[0].completed);

        assert!(!board.toggle_completed(id)?);
        assert_eq!(board.progress().to_string(), "0/2");
        Ok(())
    }

    #[test]
    fn every_mutation_resyncs_the_calendar() -> BoardResult<()> {
        let mut board = board();
        let opened = board.calendar().sync_count();

        let id = board.add("x", "2025-01-20")?;
        board.edit(id, Some("x2"), Some("2025-01-22"))?;
        board.toggle_completed(id)?;
        board.delete(id, Decision::Confirm)?;
        assert_eq!(board.calendar().sync_count(), opened + 4);

        board.filter_by_date("2025-01-22")?;
        board.show_all();
        assert_eq!(board.calendar().sync_count(), opened + 4);
        assert!(board.calendar().events().is_empty());
        Ok(())
    }

    #[test]
    fn filter_is_a_view_toggle() -> BoardResult<()> {
        let mut board = board();
        board.add("a", "2025-01-20")?;
        let before = board.tasks().to_vec();

        let view = board.filter_by_date("2025-01-25")?;
        assert!(view.rows.is_empty());
        assert!(view.placeholder.is_some());
        assert_eq!(board.mode(), ViewMode::ByDate(date!(2025 - 01 - 25)));
        assert!(matches!(board.current_view(), BoardView::ByDate(_)));
        assert_eq!(board.tasks(), before.as_slice());

        let all = board.show_all();
        assert_eq!(all.rows.len(), 1);
        assert_eq!(board.mode(), ViewMode::All);
        Ok(())
    }

    #[test]
    fn mutation_returns_to_full_view() -> BoardResult<()> {
        let mut board = board();
        board.filter_by_date("2025-01-20")?;
        board.add("a", "2025-01-20")?;
        assert_eq!(board.mode(), ViewMode::All);
        Ok(())
    }

    #[test]
    fn resolve_id_accepts_unique_prefixes() -> BoardResult<()> {
        let mut board = board();
        let id = board.add("a", "2025-01-20")?;
        let full = id.to_string();

        assert_eq!(board.resolve_id(&full)?, id);
        assert_eq!(board.resolve_id(&full[..8])?, id);
        assert!(matches!(board.resolve_id("zzzz"), Err(BoardError::NotFound(_))));
        assert!(matches!(
            board.resolve_id("00000000-0000-7000-8000-000000000000"),
            Err(BoardError::NotFound(_))
        ));
        Ok(())
    }
}
