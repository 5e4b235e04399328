//! Term contract: committed start/end dates, a deposit and monthly free minutes
//!
//! The deposit is charged with the fee in the month the contract started.
//! Every month grants a fresh allowance that does not carry over. Calls draw
//! the allowance down first; a call that runs past it pays only for the
//! minutes beyond it.
//!
//! Cancelling after the month the term ends recovers the deposit. Cancelling
//! earlier, or in the end month itself, settles the bill unchanged.

use chrono::NaiveDate;
use tracing::{debug, info};

use core_kernel::{BillingPeriod, ContractId, DateRange, Money};

use super::{Contract, ContractState};
use crate::call::Call;
use crate::error::BillingError;
use crate::ledger::{Bill, ContractKind};
use crate::settlement::Settlement;
use crate::tariff::Tariff;

#[derive(Debug, Clone)]
pub struct TermContract {
    state: ContractState,
    tariff: Tariff,
    term: DateRange,
    /// Month most recently opened; the start month until the first `new_month`
    cursor: BillingPeriod,
}

impl TermContract {
    /// Creates a contract priced with the standard tariff
    ///
    /// # Errors
    ///
    /// Returns `BillingError::InvalidTerm` if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, BillingError> {
        Self::with_tariff(start, end, Tariff::standard())
    }

    /// Creates a contract priced with a custom tariff
    ///
    /// # Errors
    ///
    /// - `BillingError::Configuration` if the tariff is inconsistent
    /// - `BillingError::InvalidTerm` if `end` is before `start`
    pub fn with_tariff(start: NaiveDate, end: NaiveDate, tariff: Tariff) -> Result<Self, BillingError> {
        tariff.validate()?;
        let term = DateRange::new(start, end).map_err(BillingError::InvalidTerm)?;

        Ok(Self {
            state: ContractState::new(start, tariff.currency),
            tariff,
            term,
            cursor: term.start_period(),
        })
    }

    pub fn end(&self) -> NaiveDate {
        self.term.end
    }

    pub fn cursor(&self) -> BillingPeriod {
        self.cursor
    }

    /// True once the cursor has moved past the end month of the term
    fn past_term_end(&self) -> bool {
        let end = self.term.end_period();
        self.cursor.year() >= end.year() && self.cursor.month() > end.month()
    }
}

impl Contract for TermContract {
    fn id(&self) -> ContractId {
        self.state.id()
    }

    fn kind(&self) -> ContractKind {
        ContractKind::Term
    }

    fn start(&self) -> Option<NaiveDate> {
        self.state.start()
    }

    fn bill(&self) -> &Bill {
        self.state.bill()
    }

    fn period(&self) -> Option<BillingPeriod> {
        self.state.period()
    }

    fn new_month(
        &mut self,
        period: BillingPeriod,
        mut bill: Bill,
    ) -> Result<Option<(BillingPeriod, Bill)>, BillingError> {
        self.state.ensure_active()?;

        bill.set_rate(ContractKind::Term, self.tariff.term_minute_rate);
        if period == self.term.start_period() {
            bill.add_fixed_cost(self.tariff.term_deposit + self.tariff.term_monthly_fee);
        } else {
            bill.add_fixed_cost(self.tariff.term_monthly_fee);
        }
        bill.add_free_minutes(self.tariff.term_free_minutes);

        let previous = self.state.install(period, bill);
        self.cursor = period;

        info!(contract_id = %self.state.id(), %period, "Opened term billing period");
        Ok(previous)
    }

    fn bill_call(&mut self, call: &Call) -> Result<(), BillingError> {
        self.state.ensure_active()?;

        let minutes = call.billed_minutes();
        let bill = self.state.bill_mut();
        let free = bill.consume_free_minutes(minutes);
        let paid = minutes - free;
        bill.add_billed_minutes(paid);

        debug!(
            contract_id = %self.state.id(),
            call_id = %call.id,
            free,
            paid,
            remaining = self.state.bill().free_minutes(),
            "Billed call"
        );
        Ok(())
    }

    fn cancel(&mut self) -> Result<Settlement, BillingError> {
        self.state.deactivate()?;

        let cost = self.state.bill().total_cost();
        let owed = if self.past_term_end() {
            let deposit = Money::new(self.tariff.term_deposit, cost.currency());
            cost.checked_sub(&deposit)?
        } else {
            cost
        };

        info!(
            contract_id = %self.state.id(),
            cursor = %self.cursor,
            end = %self.term.end,
            %owed,
            "Cancelled term contract"
        );
        Ok(Settlement::Owes(owed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn call_of(seconds: i64) -> Call {
        let time = NaiveDateTime::parse_from_str("2019-01-15 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        Call::new("867-5309", "555-0100", time, seconds).unwrap()
    }

    fn period(month: u32, year: i32) -> BillingPeriod {
        BillingPeriod::new(month, year).unwrap()
    }

    #[test]
    fn test_cursor_starts_at_start_month() {
        let term = TermContract::new(date(2019, 3, 10), date(2019, 9, 10)).unwrap();
        assert_eq!(term.cursor(), period(3, 2019));
        assert_eq!(term.end(), date(2019, 9, 10));
        assert_eq!(term.period(), None);
    }

    #[test]
    fn test_reversed_term_rejected() {
        let result = TermContract::new(date(2019, 9, 10), date(2019, 3, 10));
        assert!(matches!(result, Err(BillingError::InvalidTerm(_))));
    }

    #[test]
    fn test_with_tariff_rejects_negative_rate() {
        let tariff = Tariff {
            term_minute_rate: dec!(-0.1),
            ..Tariff::standard()
        };
        let result = TermContract::with_tariff(date(2019, 1, 1), date(2019, 12, 31), tariff);
        assert!(matches!(result, Err(BillingError::Configuration(_))));
    }

    #[test]
    fn test_deposit_only_in_start_month() {
        let mut term = TermContract::new(date(2019, 1, 1), date(2019, 12, 31)).unwrap();

        term.new_month(period(1, 2019), Bill::new(Currency::CAD)).unwrap();
        assert_eq!(term.bill().total_cost().amount(), dec!(320.00));

        term.new_month(period(2, 2019), Bill::new(Currency::CAD)).unwrap();
        assert_eq!(term.bill().total_cost().amount(), dec!(20.00));
        assert_eq!(term.cursor(), period(2, 2019));
    }

    #[test]
    fn test_same_month_next_year_is_not_start_month() {
        let mut term = TermContract::new(date(2019, 1, 1), date(2020, 12, 31)).unwrap();
        term.new_month(period(1, 2020), Bill::new(Currency::CAD)).unwrap();
        assert_eq!(term.bill().total_cost().amount(), dec!(20.00));
    }

    #[test]
    fn test_allowance_resets_without_carry_over() {
        let mut term = TermContract::new(date(2019, 1, 1), date(2019, 12, 31)).unwrap();
        term.new_month(period(1, 2019), Bill::new(Currency::CAD)).unwrap();
        term.bill_call(&call_of(600)).unwrap();
        assert_eq!(term.bill().free_minutes(), 90);

        term.new_month(period(2, 2019), Bill::new(Currency::CAD)).unwrap();
        assert_eq!(term.bill().free_minutes(), 100);
    }

    #[test]
    fn test_call_crossing_allowance_bills_overflow() {
        let mut term = TermContract::new(date(2019, 1, 1), date(2019, 12, 31)).unwrap();
        term.new_month(period(1, 2019), Bill::new(Currency::CAD)).unwrap();
        term.bill_call(&call_of(95 * 60)).unwrap();
        term.bill_call(&call_of(10 * 60)).unwrap();

        assert_eq!(term.bill().free_minutes(), 0);
        assert_eq!(term.bill().billed_minutes(), 5);
        assert_eq!(term.bill().total_cost().amount(), dec!(320.50));
    }

    #[test]
    fn test_call_exactly_exhausting_allowance_bills_nothing() {
        let mut term = TermContract::new(date(2019, 1, 1), date(2019, 12, 31)).unwrap();
        term.new_month(period(1, 2019), Bill::new(Currency::CAD)).unwrap();
        term.bill_call(&call_of(6000)).unwrap();

        assert_eq!(term.bill().free_minutes(), 0);
        assert_eq!(term.bill().billed_minutes(), 0);
    }

    #[test]
    fn test_cancel_after_end_month_recovers_deposit() {
        let mut term = TermContract::new(date(2019, 1, 1), date(2019, 6, 30)).unwrap();
        term.new_month(period(7, 2019), Bill::new(Currency::CAD)).unwrap();

        let owed = term.cancel().unwrap().amount().unwrap();
        assert_eq!(owed.amount(), dec!(-280.00));
    }

    #[test]
    fn test_cancel_in_end_month_keeps_full_cost() {
        let mut term = TermContract::new(date(2019, 1, 1), date(2019, 6, 30)).unwrap();
        term.new_month(period(6, 2019), Bill::new(Currency::CAD)).unwrap();

        let owed = term.cancel().unwrap().amount().unwrap();
        assert_eq!(owed.amount(), dec!(20.00));
    }

    #[test]
    fn test_cancel_in_later_year_but_earlier_month_keeps_full_cost() {
        let mut term = TermContract::new(date(2019, 1, 1), date(2019, 6, 30)).unwrap();
        term.new_month(period(3, 2020), Bill::new(Currency::CAD)).unwrap();

        let owed = term.cancel().unwrap().amount().unwrap();
        assert_eq!(owed.amount(), dec!(20.00));
    }
}
