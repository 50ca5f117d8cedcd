use time::{Date, OffsetDateTime};

/// Source of the current instant.
///
/// Every call re-reads the clock; callers must not cache `today()` across actions.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> OffsetDateTime;

    /// Current calendar day in the clock's offset.
    fn today(&self) -> Date {
        self.now().date()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

/// Wall clock in the local offset, falling back to UTC when the offset is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl FixedClock {
    /// Midnight UTC of `date`.
    #[must_use]
    pub const fn at_date(date: Date) -> Self {
        Self(date.midnight().assume_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
