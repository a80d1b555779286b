//! Clock port.
//!
//! Extraction stamps `<Month> <day>` dates with the current year; the year
//! comes from here so tests can pin it.

use chrono::{Datelike, NaiveDate};

/// Source of "today".
pub trait Clock: Send + Sync {
    /// Today's calendar date.
    fn today(&self) -> NaiveDate;

    /// Year used to complete partial dates.
    fn current_year(&self) -> i32 {
        self.today().year()
    }
}
