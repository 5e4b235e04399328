//! Phone line - drives one contract through its billing months
//!
//! The line opens months in order, checks each call belongs to the open
//! month, keeps the call history and archives every closed bill so past
//! months can still be reported on.

use std::collections::BTreeMap;
use tracing::{info, warn};

use core_kernel::{BillingPeriod, LineId};

use crate::call::Call;
use crate::contract::Contract;
use crate::error::BillingError;
use crate::ledger::{Bill, BillSummary};
use crate::settlement::Settlement;

/// A single phone line and the contract it is billed under
#[derive(Debug)]
pub struct PhoneLine {
    id: LineId,
    number: String,
    contract: Box<dyn Contract>,
    archived_bills: BTreeMap<BillingPeriod, Bill>,
    call_history: Vec<Call>,
}

impl PhoneLine {
    pub fn new(number: impl Into<String>, contract: impl Contract + 'static) -> Self {
        Self {
            id: LineId::new_v7(),
            number: number.into(),
            contract: Box::new(contract),
            archived_bills: BTreeMap::new(),
            call_history: Vec::new(),
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn contract(&self) -> &dyn Contract {
        self.contract.as_ref()
    }

    /// Opens the billing month `month`/`year`
    ///
    /// Opening a month that is already open or archived does nothing while
    /// the line is active.
    ///
    /// # Errors
    ///
    /// - `BillingError::Temporal` if `month` is outside 1..=12
    /// - `BillingError::ContractCancelled` if the line has been cancelled
    pub fn new_month(&mut self, month: u32, year: i32) -> Result<(), BillingError> {
        let period = BillingPeriod::new(month, year)?;
        if !self.contract.is_active() {
            return Err(BillingError::ContractCancelled(self.contract.id()));
        }
        if self.contract.period() == Some(period) || self.archived_bills.contains_key(&period) {
            return Ok(());
        }

        let bill = Bill::new(self.contract.bill().currency());
        if let Some((closed, previous)) = self.contract.new_month(period, bill)? {
            self.archived_bills.insert(closed, previous);
        }

        info!(line = %self.number, %period, "Opened billing month");
        Ok(())
    }

    /// Records `call` and charges it to the open month
    ///
    /// # Errors
    ///
    /// - `BillingError::NoBillingPeriod` if no month has been opened yet
    /// - `BillingError::PeriodMismatch` if the call is not in the open month
    /// - `BillingError::ContractCancelled` if the line has been cancelled
    pub fn make_call(&mut self, call: Call) -> Result<(), BillingError> {
        let current = self.contract.period().ok_or(BillingError::NoBillingPeriod)?;
        let call_period = call.period();
        if call_period != current {
            warn!(line = %self.number, call_id = %call.id, %call_period, %current, "Rejected call outside open month");
            return Err(BillingError::PeriodMismatch {
                call: call_period,
                current,
            });
        }

        self.contract.bill_call(&call)?;
        self.call_history.push(call);
        Ok(())
    }

    /// The bill for `period`, whether open or archived
    pub fn bill(&self, period: BillingPeriod) -> Option<&Bill> {
        if self.contract.period() == Some(period) {
            Some(self.contract.bill())
        } else {
            self.archived_bills.get(&period)
        }
    }

    pub fn bill_summary(&self, period: BillingPeriod) -> Option<BillSummary> {
        self.bill(period).map(Bill::summary)
    }

    /// Every billed period, oldest first
    pub fn billed_periods(&self) -> Vec<BillingPeriod> {
        let mut periods: Vec<BillingPeriod> = self.archived_bills.keys().copied().collect();
        periods.extend(self.contract.period());
        periods
    }

    pub fn call_history(&self) -> &[Call] {
        &self.call_history
    }

    /// Calls made during `period`
    pub fn calls_in(&self, period: BillingPeriod) -> impl Iterator<Item = &Call> {
        self.call_history.iter().filter(move |c| c.period() == period)
    }

    /// Closes the line and settles the contract
    pub fn cancel(&mut self) -> Result<Settlement, BillingError> {
        let settlement = self.contract.cancel()?;
        info!(line = %self.number, ?settlement, "Cancelled phone line");
        Ok(settlement)
    }
}
