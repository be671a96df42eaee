//! Wall clock used to anchor generated dates.
//!
//! Generators never read the system time themselves; they take the
//! reference instant from a Clock so tests can pin it.

use chrono::{Local, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Local system time, read on every call.
    #[default]
    System,
    /// A frozen instant.
    Fixed(NaiveDateTime),
}

impl Clock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Self::System   => Local::now().naive_local(),
            Self::Fixed(t) => *t,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
