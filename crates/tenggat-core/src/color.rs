use serde::{Serialize, Serializer};
use std::fmt;

/// 24-bit color hint carried by rendered rows and calendar events.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Overdue tasks (`#dc3545`).
    pub const OVERDUE: Self = Self(0xdc, 0x35, 0x45);
    /// Tasks due today (`#ff5733`).
    pub const DUE_TODAY: Self = Self(0xff, 0x57, 0x33);
    /// Deadline within the warning window, and open calendar events (`#ffc107`).
    pub const AMBER: Self = Self(0xff, 0xc1, 0x07);
    /// Completed calendar events (`#28a745`).
    pub const COMPLETED: Self = Self(0x28, 0xa7, 0x45);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}
