//! Custom Test Assertions
//!
//! Assertion helpers for money and settlements that print the values
//! involved when they fail.

use core_kernel::Money;
use domain_billing::{Bill, Settlement};
use rust_decimal::Decimal;

/// Asserts a Money value has exactly the expected amount
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Expected {} {}, got {}",
        actual.currency().symbol(),
        expected,
        actual
    );
}

/// Asserts a bill's total cost
pub fn assert_bill_total(bill: &Bill, expected: Decimal) {
    assert_money_eq(&bill.total_cost(), expected);
}

/// Asserts a settlement owes exactly `expected`
pub fn assert_owes(settlement: &Settlement, expected: Decimal) {
    match settlement {
        Settlement::Owes(amount) => assert_money_eq(amount, expected),
        Settlement::NothingOwed => panic!("Expected settlement owing {}, got NothingOwed", expected),
    }
}

/// Asserts a settlement signals no debt
pub fn assert_nothing_owed(settlement: &Settlement) {
    assert!(
        settlement.is_nothing_owed(),
        "Expected NothingOwed, got {:?}",
        settlement
    );
}
