//! Phone line contracts
//!
//! Every contract kind answers the same three questions with its own
//! pricing policy:
//!
//! - what a new month costs before any call is made (`new_month`)
//! - what a single call adds to the current bill (`bill_call`)
//! - what is owed when the line is closed (`cancel`)
//!
//! # Lifecycle
//!
//! ```text
//! new -> new_month -> bill_call* -> new_month -> ... -> cancel (final)
//! ```
//!
//! The driver opens each month with a fresh `Bill` before billing calls in
//! it. The contract owns the current bill and hands the replaced one back
//! so the driver can archive it. Cancellation is irreversible: every later
//! operation fails with `BillingError::ContractCancelled`.

mod month_to_month;
mod prepaid;
mod term;

pub use month_to_month::MonthToMonthContract;
pub use prepaid::PrepaidContract;
pub use term::TermContract;

use chrono::NaiveDate;
use std::fmt;
use std::mem;

use core_kernel::{BillingPeriod, ContractId, Currency};

use crate::call::Call;
use crate::error::BillingError;
use crate::ledger::{Bill, ContractKind};
use crate::settlement::Settlement;

/// Capability set shared by all contract kinds
pub trait Contract: fmt::Debug + Send {
    fn id(&self) -> ContractId;

    fn kind(&self) -> ContractKind;

    /// Start date of the contract, `None` once it has been cancelled
    fn start(&self) -> Option<NaiveDate>;

    fn is_active(&self) -> bool {
        self.start().is_some()
    }

    /// The bill for the month currently open
    fn bill(&self) -> &Bill;

    /// The month currently open, if `new_month` has been called
    fn period(&self) -> Option<BillingPeriod>;

    /// Opens `period`, configuring `bill` with this contract's fixed costs,
    /// allowance and rate
    ///
    /// Returns the previously open month and its bill, or `None` if this is
    /// the first month opened.
    fn new_month(
        &mut self,
        period: BillingPeriod,
        bill: Bill,
    ) -> Result<Option<(BillingPeriod, Bill)>, BillingError>;

    /// Charges `call` to the current bill
    ///
    /// The call is assumed to belong to the month currently open.
    fn bill_call(&mut self, call: &Call) -> Result<(), BillingError>;

    /// Deactivates the contract and settles what is owed to close the line
    fn cancel(&mut self) -> Result<Settlement, BillingError>;
}

/// State every contract kind carries
#[derive(Debug, Clone)]
pub(crate) struct ContractState {
    id: ContractId,
    start: Option<NaiveDate>,
    bill: Bill,
    period: Option<BillingPeriod>,
}

impl ContractState {
    /// Allocates an unconfigured bill so the contract is live from creation
    pub(crate) fn new(start: NaiveDate, currency: Currency) -> Self {
        Self {
            id: ContractId::new_v7(),
            start: Some(start),
            bill: Bill::new(currency),
            period: None,
        }
    }

    pub(crate) fn id(&self) -> ContractId {
        self.id
    }

    pub(crate) fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub(crate) fn bill(&self) -> &Bill {
        &self.bill
    }

    pub(crate) fn bill_mut(&mut self) -> &mut Bill {
        &mut self.bill
    }

    pub(crate) fn period(&self) -> Option<BillingPeriod> {
        self.period
    }

    pub(crate) fn ensure_active(&self) -> Result<(), BillingError> {
        if self.start.is_none() {
            return Err(BillingError::ContractCancelled(self.id));
        }
        Ok(())
    }

    /// Swaps in the bill for `period`, returning the one it replaces
    pub(crate) fn install(
        &mut self,
        period: BillingPeriod,
        bill: Bill,
    ) -> Option<(BillingPeriod, Bill)> {
        let previous_bill = mem::replace(&mut self.bill, bill);
        self.period
            .replace(period)
            .map(|previous_period| (previous_period, previous_bill))
    }

    /// Marks the contract cancelled
    pub(crate) fn deactivate(&mut self) -> Result<(), BillingError> {
        self.ensure_active()?;
        self.start = None;
        Ok(())
    }
}
