//! Date parsing and Indonesian display formatting.

use thiserror::Error;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime};

/// Wire and input format of a due date (`YYYY-MM-DD`).
pub const DUE_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const CLOCK_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

/// Error returned when a due date string cannot be understood.
#[derive(Debug, Error)]
#[error("Format tanggal harus YYYY-MM-DD.")]
pub struct DueDateError {
    /// The rejected input, as typed.
    pub input: String,
    #[source]
    source: time::error::Parse,
}

/// Parse a `YYYY-MM-DD` due date.
///
/// # Errors
/// Returns [`DueDateError`] when the input is not a valid calendar date in that format.
pub fn parse_due_date(input: &str) -> Result<Date, DueDateError> {
    Date::parse(input.trim(), DUE_DATE_FORMAT).map_err(|source| DueDateError {
        input: input.to_owned(),
        source,
    })
}

/// Format a due date as `YYYY-MM-DD`.
#[must_use]
pub fn format_due_date(date: Date) -> String {
    // The format only holds numeric components, which always format.
    date.format(DUE_DATE_FORMAT)
        .unwrap_or_else(|_| format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day()))
}

/// Long Indonesian form, e.g. `12 Januari 2025`.
#[must_use]
pub fn format_long_date(date: Date) -> String {
    format!("{} {} {}", date.day(), month_name(date.month()), date.year())
}

/// Wall clock display, `HH:MM:SS`.
#[must_use]
pub fn format_clock(now: OffsetDateTime) -> String {
    now.format(CLOCK_FORMAT)
        .unwrap_or_else(|_| format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second()))
}

/// Indonesian month name.
#[must_use]
pub const fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Januari",
        Month::February => "Februari",
        Month::March => "Maret",
        Month::April => "April",
        Month::May => "Mei",
        Month::June => "Juni",
        Month::July => "Juli",
        Month::August => "Agustus",
        Month::September => "September",
        Month::October => "Oktober",
        Month::November => "November",
        Month::December => "Desember",
    }
}
