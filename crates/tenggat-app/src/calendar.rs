//! Calendar widget contract and an in-memory implementation.

use tenggat_core::{CalendarEvent, Task, calendar_events};
use time::Date;

/// Receiver of calendar events, mirroring a widget that supports
/// remove-all and incremental add.
pub trait CalendarSink {
    /// Drop every event currently shown.
    fn remove_all_events(&mut self);
    /// Show one more event.
    fn add_event(&mut self, event: CalendarEvent);
}

/// Replace everything in `sink` with one event per task.
pub fn sync_calendar<K: CalendarSink + ?Sized>(sink: &mut K, tasks: &[Task], today: Date) {
    sink.remove_all_events();
    for event in calendar_events(tasks, today) {
        sink.add_event(event);
    }
}

/// Plain list of events, used by the terminal calendar and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventList {
    events: Vec<CalendarEvent>,
    syncs: usize,
}

impl EventList {
    /// Initialise with a list of events.
    #[must_use]
    pub const fn from_events(events: Vec<CalendarEvent>) -> Self {
        Self { events, syncs: 0 }
    }

    /// Current events in insertion order.
    #[must_use]
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Events starting on `date`.
    pub fn on(&self, date: Date) -> impl Iterator<Item = &CalendarEvent> + '_ {
        self.events.iter().filter(move |event| event.start == date)
    }

    /// How many times the list was cleared for a resync.
    #[must_use]
    pub const fn sync_count(&self) -> usize {
        self.syncs
    }
}

impl CalendarSink for EventList {
    fn remove_all_events(&mut self) {
        self.events.clear();
        self.syncs += 1;
    }

    fn add_event(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }
}
