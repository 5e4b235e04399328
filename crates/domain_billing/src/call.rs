//! Call records

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use core_kernel::{BillingPeriod, CallId};

use crate::error::BillingError;

/// A completed call made from a phone line
///
/// Calls are billed in whole minutes, always rounding up: a 1 second call
/// costs a full minute, a 0 second call costs nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub id: CallId,
    /// Number the call was made from
    pub src_number: String,
    /// Number that was called
    pub dst_number: String,
    /// When the call started
    pub time: NaiveDateTime,
    duration_seconds: u32,
}

impl Call {
    /// Creates a call record
    ///
    /// # Errors
    ///
    /// Returns `BillingError::InvalidCallDuration` for a negative duration
    /// or one too long to represent.
    pub fn new(
        src_number: impl Into<String>,
        dst_number: impl Into<String>,
        time: NaiveDateTime,
        duration_seconds: i64,
    ) -> Result<Self, BillingError> {
        let duration_seconds = u32::try_from(duration_seconds)
            .map_err(|_| BillingError::InvalidCallDuration(duration_seconds))?;

        Ok(Self {
            id: CallId::new_v7(),
            src_number: src_number.into(),
            dst_number: dst_number.into(),
            time,
            duration_seconds,
        })
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Minutes charged for this call: `ceil(duration / 60)`
    pub fn billed_minutes(&self) -> u32 {
        self.duration_seconds.div_ceil(60)
    }

    /// The billing month this call belongs to
    pub fn period(&self) -> BillingPeriod {
        BillingPeriod::of_datetime(self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_of(seconds: i64) -> Call {
        let time = NaiveDateTime::parse_from_str("2019-01-15 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        Call::new("867-5309", "555-0100", time, seconds).unwrap()
    }

    #[test]
    fn test_duration_kept_in_seconds() {
        let call = call_of(61);
        assert_eq!(call.duration_seconds(), 61);
        assert_eq!(call.billed_minutes() * 60, 120);
    }

    #[test]
    fn test_billed_minutes_round_up() {
        assert_eq!(call_of(0).billed_minutes(), 0);
        assert_eq!(call_of(1).billed_minutes(), 1);
        assert_eq!(call_of(60).billed_minutes(), 1);
        assert_eq!(call_of(61).billed_minutes(), 2);
        assert_eq!(call_of(6000).billed_minutes(), 100);
    }

    #[test]
    fn test_negative_duration_rejected() {
        let time = NaiveDateTime::parse_from_str("2019-01-15 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let result = Call::new("867-5309", "555-0100", time, -1);
        assert!(matches!(result, Err(BillingError::InvalidCallDuration(-1))));
    }

    #[test]
    fn test_period_from_start_time() {
        assert_eq!(call_of(30).period(), BillingPeriod::new(1, 2019).unwrap());
    }
}
