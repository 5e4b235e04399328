//! Pre-built Test Fixtures
//!
//! Consistent dates, periods and contracts for unit and scenario tests.

use chrono::NaiveDate;
use core_kernel::BillingPeriod;
use domain_billing::{MonthToMonthContract, PrepaidContract, TermContract};
use rust_decimal_macros::dec;

/// Fixture for calendar data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard contract start date (Jan 1, 2019)
    pub fn contract_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 1, 1).unwrap()
    }

    /// Standard term end date (Jun 30, 2019)
    pub fn term_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 6, 30).unwrap()
    }

    /// Builds a billing period, panicking on an invalid month
    pub fn period(month: u32, year: i32) -> BillingPeriod {
        BillingPeriod::new(month, year).unwrap()
    }

    /// First billing month of the standard contracts
    pub fn january_2019() -> BillingPeriod {
        Self::period(1, 2019)
    }
}

/// Fixture for contracts priced with the standard tariff
pub struct ContractFixtures;

impl ContractFixtures {
    pub fn month_to_month() -> MonthToMonthContract {
        MonthToMonthContract::new(TemporalFixtures::contract_start())
    }

    /// Term running Jan 1 to Jun 30, 2019
    pub fn term() -> TermContract {
        TermContract::new(TemporalFixtures::contract_start(), TemporalFixtures::term_end()).unwrap()
    }

    /// Prepaid contract with 50.00 of initial credit
    pub fn prepaid() -> PrepaidContract {
        PrepaidContract::new(TemporalFixtures::contract_start(), dec!(50))
    }
}

/// Fixture for phone numbers
pub struct NumberFixtures;

impl NumberFixtures {
    pub fn line() -> &'static str {
        "867-5309"
    }

    pub fn callee() -> &'static str {
        "555-0100"
    }
}
