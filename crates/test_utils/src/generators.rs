//! Property-Based Test Generators
//!
//! Proptest strategies for call durations, balances and months.

use core_kernel::BillingPeriod;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Call durations up to ten hours, in seconds
pub fn duration_seconds_strategy() -> impl Strategy<Value = i64> {
    0i64..36_000i64
}

/// A sequence of call durations for one month
pub fn call_durations_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(duration_seconds_strategy(), 0..40)
}

/// Initial prepaid credit between 0.00 and 200.00
pub fn prepaid_amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..20_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Any valid billing period between 2000 and 2099
pub fn billing_period_strategy() -> impl Strategy<Value = BillingPeriod> {
    (1u32..=12u32, 2000i32..2100i32)
        .prop_map(|(month, year)| BillingPeriod::new(month, year).unwrap())
}
