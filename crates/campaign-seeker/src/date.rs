//! Date parsing and inclusive date ranges.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::error::{Result, SeekerError};

// Month-first wins for `NN/NN/YYYY`; day-first only when the month cannot fit.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY` and RFC 3339 timestamps
/// (the date part is kept). A slash date whose first number cannot be a
/// month, such as `15/01/2023`, is read day-first.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| SeekerError::InvalidDate(trimmed.to_string()))
}

/// An inclusive `[start, end]` range of calendar dates.
///
/// A range can never be inverted: construction rejects `start > end`.
///
/// ```
/// use campaign_seeker::DateRange;
///
/// let range = DateRange::parse("2023-01-01", "2023-12-31").unwrap();
/// assert!(range.contains(range.start()));
/// assert!(range.contains(range.end()));
/// assert!(DateRange::parse("2024-01-01", "2023-01-01").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(SeekerError::InvertedDateRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// Parses both bounds with [`parse_date`] and builds the range.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        DateRange::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns `true` if `date` lies within the range, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
