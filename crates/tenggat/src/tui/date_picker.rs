use tenggat_core::format_due_date;
use time::util::days_in_year_month;
use time::{Date, Duration, Month};

/// Keyboard-driven date picker emitting the selection as `YYYY-MM-DD`.
#[derive(Debug, Clone)]
pub(super) struct DatePicker {
    cursor: Date,
}

impl DatePicker {
    pub(super) const fn new(initial: Date) -> Self {
        Self { cursor: initial }
    }

    pub(super) const fn cursor(&self) -> Date {
        self.cursor
    }

    pub(super) const fn jump_to(&mut self, date: Date) {
        self.cursor = date;
    }

    pub(super) fn shift_days(&mut self, days: i64) {
        if let Some(date) = self.cursor.checked_add(Duration::days(days)) {
            self.cursor = date;
        }
    }

    /// Move by whole months, clamping the day to the target month's length.
    pub(super) fn shift_months(&mut self, months: i32) {
        let index = self.cursor.year() * 12 + i32::from(u8::from(self.cursor.month())) - 1 + months;
        let year = index.div_euclid(12);
        let Some(month) = u8::try_from(index.rem_euclid(12) + 1)
            .ok()
            .and_then(|number| Month::try_from(number).ok())
        else {
            return;
        };
        let day = self.cursor.day().min(days_in_year_month(year, month));
        if let Ok(date) = Date::from_calendar_date(year, month, day) {
            self.cursor = date;
        }
    }

    pub(super) fn formatted(&self) -> String {
        format_due_date(self.cursor)
    }

    /// Hand the formatted selection to `on_change`.
    pub(super) fn submit<R>(&self, on_change: impl FnOnce(&str) -> R) -> R {
        on_change(&self.formatted())
    }
}
