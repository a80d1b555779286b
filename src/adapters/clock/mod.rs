//! Clock adapters.
//!
//! - **SystemClock** - Reads the UTC wall clock
//! - **FixedClock** - Always returns the same date (tests, reproducible demos)

use chrono::{NaiveDate, Utc};

use crate::ports::Clock;

/// Wall-clock implementation of the Clock port.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Pins the clock to January 1st of `year`.
    ///
    /// Returns `None` for years chrono cannot represent.
    pub fn in_year(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 1, 1).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
