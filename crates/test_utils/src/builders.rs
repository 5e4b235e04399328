//! Test Data Builders
//!
//! Builder for call records with sensible defaults, so tests only state
//! the duration and month they care about.

use chrono::{NaiveDate, NaiveDateTime};
use domain_billing::Call;

use crate::fixtures::NumberFixtures;

/// Builder for constructing test calls
pub struct TestCallBuilder {
    src_number: String,
    dst_number: String,
    time: NaiveDateTime,
    duration_seconds: i64,
}

impl Default for TestCallBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCallBuilder {
    /// A one minute call on Jan 15, 2019 at noon
    pub fn new() -> Self {
        Self {
            src_number: NumberFixtures::line().to_string(),
            dst_number: NumberFixtures::callee().to_string(),
            time: NaiveDate::from_ymd_opt(2019, 1, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            duration_seconds: 60,
        }
    }

    pub fn seconds(mut self, seconds: i64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    pub fn minutes(self, minutes: i64) -> Self {
        self.seconds(minutes * 60)
    }

    /// Places the call on the 15th of the given month at noon
    pub fn in_month(mut self, month: u32, year: i32) -> Self {
        self.time = NaiveDate::from_ymd_opt(year, month, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        self
    }

    /// Builds the call, panicking on an invalid duration
    pub fn build(self) -> Call {
        Call::new(self.src_number, self.dst_number, self.time, self.duration_seconds).unwrap()
    }
}
