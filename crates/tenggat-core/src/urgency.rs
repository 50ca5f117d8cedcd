use serde::Serialize;
use time::Date;

use crate::color::Rgb;

/// Upper bound (inclusive) of the day difference classified as [`Urgency::Warning`].
pub const WARNING_WINDOW_DAYS: i64 = 3;

/// Urgency bucket of a task relative to the current day.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Due date has passed.
    Due,
    /// Due date is today.
    Today,
    /// Due within the next [`WARNING_WINDOW_DAYS`] days.
    Warning,
    /// Further away than the warning window.
    Normal,
}

impl Urgency {
    /// Classify `due` against `today`.
    ///
    /// Both sides are calendar days, so the result does not depend on the time of day.
    #[must_use]
    pub fn classify(due: Date, today: Date) -> Self {
        match (due - today).whole_days() {
            diff if diff < 0 => Self::Due,
            0 => Self::Today,
            diff if diff <= WARNING_WINDOW_DAYS => Self::Warning,
            _ => Self::Normal,
        }
    }

    /// Annotation appended to the task text in the list view.
    #[must_use]
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Due => Some("(Overdue!)"),
            Self::Today => Some("(Due today!)"),
            Self::Warning => Some("(DEADLINE MEPET BOSS!!)"),
            Self::Normal => None,
        }
    }

    /// Row background hint.
    #[must_use]
    pub const fn background(self) -> Option<Rgb> {
        match self {
            Self::Due => Some(Rgb::OVERDUE),
            Self::Today => Some(Rgb::DUE_TODAY),
            Self::Warning => Some(Rgb::AMBER),
            Self::Normal => None,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Due => "due",
            Self::Today => "today",
            Self::Warning => "warning",
            Self::Normal => "normal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;
    use time::macros::date;

    #[test]
    fn thresholds_split_at_zero_and_three_days() {
        let today = date!(2025 - 01 - 12);
        let cases = [
            (-400, Urgency::Due),
            (-1, Urgency::Due),
            (0, Urgency::Today),
            (1, Urgency::Warning),
            (2, Urgency::Warning),
            (3, Urgency::Warning),
            (4, Urgency::Normal),
            (365, Urgency::Normal),
        ];
        for (offset, expected) in cases {
            let due = today + Duration::days(offset);
            assert_eq!(Urgency::classify(due, today), expected, "offset {offset}");
        }
    }

    #[test]
    fn classification_crosses_month_and_year_boundaries() {
        assert_eq!(
            Urgency::classify(date!(2025 - 01 - 02), date!(2024 - 12 - 30)),
            Urgency::Warning
        );
        assert_eq!(
            Urgency::classify(date!(2024 - 02 - 28), date!(2024 - 03 - 01)),
            Urgency::Due
        );
    }

    #[test]
    fn normal_tasks_carry_no_annotation() {
        assert_eq!(Urgency::Normal.suffix(), None);
        assert_eq!(Urgency::Normal.background(), None);
        assert_eq!(Urgency::Warning.suffix(), Some("(DEADLINE MEPET BOSS!!)"));
        assert_eq!(Urgency::Today.background(), Some(Rgb::DUE_TODAY));
    }
}
