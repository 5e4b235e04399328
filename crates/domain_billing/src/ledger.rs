//! Monthly bill ledger
//!
//! A `Bill` accumulates one month of charges for one phone line: the fixed
//! cost (fees, deposits and credits), the free minutes still available and
//! the minutes charged at the per-minute rate. It holds no pricing policy of
//! its own; the owning contract decides what goes in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Currency, Money};

/// The contract kind a bill was configured for
///
/// Informational only: cost computation never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractKind {
    MonthToMonth,
    Term,
    Prepaid,
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContractKind::MonthToMonth => "MTM",
            ContractKind::Term => "TERM",
            ContractKind::Prepaid => "PREPAID",
        };
        write!(f, "{}", label)
    }
}

/// One month of charges for a phone line
///
/// # Invariants
///
/// - once the month is configured, `free_minutes` only decreases, through
///   `consume_free_minutes`
/// - total cost is always `fixed_cost + billed_minutes * minute_rate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    kind: Option<ContractKind>,
    currency: Currency,
    fixed_cost: Decimal,
    free_minutes: u32,
    billed_minutes: u32,
    minute_rate: Decimal,
}

impl Bill {
    /// Creates an empty bill with no rate configured
    pub fn new(currency: Currency) -> Self {
        Self {
            kind: None,
            currency,
            fixed_cost: Decimal::ZERO,
            free_minutes: 0,
            billed_minutes: 0,
            minute_rate: Decimal::ZERO,
        }
    }

    /// Sets the per-minute rate and records which contract kind set it
    pub fn set_rate(&mut self, kind: ContractKind, minute_rate: Decimal) {
        self.kind = Some(kind);
        self.minute_rate = minute_rate;
    }

    /// Adds to the fixed cost; a negative amount records a credit
    pub fn add_fixed_cost(&mut self, amount: Decimal) {
        self.fixed_cost += amount;
    }

    pub fn add_free_minutes(&mut self, minutes: u32) {
        self.free_minutes = self.free_minutes.saturating_add(minutes);
    }

    pub fn add_billed_minutes(&mut self, minutes: u32) {
        self.billed_minutes = self.billed_minutes.saturating_add(minutes);
    }

    /// Draws up to `minutes` from the free allowance
    ///
    /// Returns the number of minutes actually consumed, which is less than
    /// requested when the allowance runs out.
    pub fn consume_free_minutes(&mut self, minutes: u32) -> u32 {
        let consumed = minutes.min(self.free_minutes);
        self.free_minutes -= consumed;
        consumed
    }

    /// Total owed for the month: fixed cost plus billed minutes at the rate
    pub fn total_cost(&self) -> Money {
        Money::new(
            self.fixed_cost + Decimal::from(self.billed_minutes) * self.minute_rate,
            self.currency,
        )
    }

    pub fn kind(&self) -> Option<ContractKind> {
        self.kind
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn fixed_cost(&self) -> Decimal {
        self.fixed_cost
    }

    pub fn free_minutes(&self) -> u32 {
        self.free_minutes
    }

    pub fn billed_minutes(&self) -> u32 {
        self.billed_minutes
    }

    pub fn minute_rate(&self) -> Decimal {
        self.minute_rate
    }

    /// Snapshot of the bill for reporting
    pub fn summary(&self) -> BillSummary {
        BillSummary {
            kind: self.kind,
            fixed_cost: Money::new(self.fixed_cost, self.currency),
            free_minutes: self.free_minutes,
            billed_minutes: self.billed_minutes,
            minute_rate: self.minute_rate,
            total: self.total_cost(),
        }
    }
}

/// Serialisable view of a bill handed to reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSummary {
    pub kind: Option<ContractKind>,
    pub fixed_cost: Money,
    pub free_minutes: u32,
    pub billed_minutes: u32,
    pub minute_rate: Decimal,
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_bill_costs_nothing() {
        let bill = Bill::new(Currency::CAD);
        assert!(bill.total_cost().is_zero());
        assert_eq!(bill.kind(), None);
    }

    #[test]
    fn test_total_cost_combines_fixed_and_billed() {
        let mut bill = Bill::new(Currency::CAD);
        bill.set_rate(ContractKind::MonthToMonth, dec!(0.05));
        bill.add_fixed_cost(dec!(50));
        bill.add_billed_minutes(3);

        assert_eq!(bill.total_cost().amount(), dec!(50.15));
    }

    #[test]
    fn test_negative_fixed_cost_is_a_credit() {
        let mut bill = Bill::new(Currency::CAD);
        bill.add_fixed_cost(dec!(-50));
        assert!(bill.total_cost().is_negative());
    }

    #[test]
    fn test_consume_free_minutes_stops_at_zero() {
        let mut bill = Bill::new(Currency::CAD);
        bill.add_free_minutes(5);

        assert_eq!(bill.consume_free_minutes(3), 3);
        assert_eq!(bill.consume_free_minutes(3), 2);
        assert_eq!(bill.consume_free_minutes(3), 0);
        assert_eq!(bill.free_minutes(), 0);
    }

    #[test]
    fn test_rate_kind_is_informational() {
        let mut a = Bill::new(Currency::CAD);
        let mut b = Bill::new(Currency::CAD);
        a.set_rate(ContractKind::Term, dec!(0.1));
        b.set_rate(ContractKind::Prepaid, dec!(0.1));
        a.add_billed_minutes(10);
        b.add_billed_minutes(10);

        assert_eq!(a.total_cost(), b.total_cost());
    }

    #[test]
    fn test_summary_matches_bill() {
        let mut bill = Bill::new(Currency::CAD);
        bill.set_rate(ContractKind::Term, dec!(0.1));
        bill.add_fixed_cost(dec!(320));
        bill.add_free_minutes(100);
        bill.add_billed_minutes(1);

        let summary = bill.summary();
        assert_eq!(summary.kind, Some(ContractKind::Term));
        assert_eq!(summary.free_minutes, 100);
        assert_eq!(summary.billed_minutes, 1);
        assert_eq!(summary.total.amount(), dec!(320.1));
    }
}
