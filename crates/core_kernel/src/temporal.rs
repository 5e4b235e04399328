//! Calendar types for monthly billing
//!
//! - `BillingPeriod`: one calendar month of a given year, the unit a bill covers
//! - `DateRange`: an inclusive start/end date pair, used for committed terms

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid month {0}: must be between 1 and 12")]
    InvalidMonth(u32),

    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },
}

/// A calendar month of a specific year
///
/// Periods order chronologically (year first, then month), which is what
/// the driver relies on when archiving bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BillingPeriod {
    year: i32,
    month: u32,
}

impl BillingPeriod {
    /// Creates a period, rejecting months outside 1..=12
    pub fn new(month: u32, year: i32) -> Result<Self, TemporalError> {
        if !(1..=12).contains(&month) {
            return Err(TemporalError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The period containing the given date
    pub fn of_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The period containing the given timestamp
    pub fn of_datetime(timestamp: NaiveDateTime) -> Self {
        Self::of_date(timestamp.date())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The following calendar month, rolling December into January
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Represents an inclusive date range, such as a contract's committed term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start_period(&self) -> BillingPeriod {
        BillingPeriod::of_date(self.start)
    }

    pub fn end_period(&self) -> BillingPeriod {
        BillingPeriod::of_date(self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_period_rejects_bad_month() {
        assert_eq!(BillingPeriod::new(0, 2019), Err(TemporalError::InvalidMonth(0)));
        assert_eq!(BillingPeriod::new(13, 2019), Err(TemporalError::InvalidMonth(13)));
        assert!(BillingPeriod::new(12, 2019).is_ok());
    }

    #[test]
    fn test_next_rolls_over_year() {
        let december = BillingPeriod::new(12, 2018).unwrap();
        assert_eq!(december.next(), BillingPeriod::new(1, 2019).unwrap());
    }

    #[test]
    fn test_period_ordering_is_chronological() {
        let late_2018 = BillingPeriod::new(11, 2018).unwrap();
        let early_2019 = BillingPeriod::new(2, 2019).unwrap();
        assert!(late_2018 < early_2019);
    }

    #[test]
    fn test_date_range_rejects_reversed_dates() {
        let start = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        assert!(matches!(
            DateRange::new(start, end),
            Err(TemporalError::InvalidPeriod { .. })
        ));
    }
}
