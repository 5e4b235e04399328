//! Prepaid contract: no fee, no allowance, calls draw down a running balance
//!
//! The balance is signed: negative is unspent credit, positive is money the
//! customer owes. Credit added to the account is mirrored on the current
//! bill as a negative fixed cost so the two never drift apart.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use core_kernel::{BillingPeriod, ContractId, Money};

use super::{Contract, ContractState};
use crate::call::Call;
use crate::error::BillingError;
use crate::ledger::{Bill, ContractKind};
use crate::settlement::Settlement;
use crate::tariff::Tariff;

#[derive(Debug, Clone)]
pub struct PrepaidContract {
    state: ContractState,
    tariff: Tariff,
    balance: Decimal,
}

impl PrepaidContract {
    /// Creates a contract with `amount` of initial credit, priced with the
    /// standard tariff
    pub fn new(start: NaiveDate, amount: Decimal) -> Self {
        Self::priced(start, amount, Tariff::standard())
    }

    /// Creates a contract priced with a custom tariff
    ///
    /// # Errors
    ///
    /// Returns `BillingError::Configuration` if the tariff is inconsistent,
    /// such as a top-up target above the top-up threshold.
    pub fn with_tariff(start: NaiveDate, amount: Decimal, tariff: Tariff) -> Result<Self, BillingError> {
        tariff.validate()?;
        Ok(Self::priced(start, amount, tariff))
    }

    fn priced(start: NaiveDate, amount: Decimal, tariff: Tariff) -> Self {
        Self {
            state: ContractState::new(start, tariff.currency),
            tariff,
            balance: -amount,
        }
    }

    /// Current balance; negative means credit remains
    pub fn balance(&self) -> Money {
        Money::new(self.balance, self.tariff.currency)
    }

    /// Credits `amount` to the account and to the current bill
    pub fn add_to_balance(&mut self, amount: Decimal) -> Result<(), BillingError> {
        self.state.ensure_active()?;

        self.balance -= amount;
        self.state.bill_mut().add_fixed_cost(-amount);
        Ok(())
    }
}

impl Contract for PrepaidContract {
    fn id(&self) -> ContractId {
        self.state.id()
    }

    fn kind(&self) -> ContractKind {
        ContractKind::Prepaid
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

        bill.set_rate(ContractKind::Prepaid, self.tariff.prepaid_minute_rate);
        // The top-up must land on the new month's bill.
        let previous = self.state.install(period, bill);

        if self.balance > self.tariff.prepaid_top_up_threshold {
            let top_up = self.balance - self.tariff.prepaid_top_up_target;
            self.add_to_balance(top_up)?;
            info!(
                contract_id = %self.state.id(),
                %period,
                %top_up,
                balance = %self.balance,
                "Topped up prepaid balance"
            );
        } else {
            self.state.bill_mut().add_fixed_cost(self.balance);
            info!(
                contract_id = %self.state.id(),
                %period,
                balance = %self.balance,
                "Opened prepaid billing period"
            );
        }

        Ok(previous)
    }

    fn bill_call(&mut self, call: &Call) -> Result<(), BillingError> {
        self.state.ensure_active()?;

        let minutes = call.billed_minutes();
        let bill = self.state.bill_mut();
        bill.add_billed_minutes(minutes);
        self.balance += bill.minute_rate() * Decimal::from(minutes);

        debug!(
            contract_id = %self.state.id(),
            call_id = %call.id,
            minutes,
            balance = %self.balance,
            "Billed call"
        );
        Ok(())
    }

    fn cancel(&mut self) -> Result<Settlement, BillingError> {
        self.state.deactivate()?;

        let settlement = if self.balance > Decimal::ZERO {
            Settlement::Owes(self.balance())
        } else {
            Settlement::NothingOwed
        };

        info!(
            contract_id = %self.state.id(),
            balance = %self.balance,
            "Cancelled prepaid contract"
        );
        Ok(settlement)
    }
}
