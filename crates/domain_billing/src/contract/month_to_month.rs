//! Month-to-month contract: flat monthly fee, every minute paid, no penalty

use chrono::NaiveDate;
use tracing::{debug, info};

use core_kernel::{BillingPeriod, ContractId};

use super::{Contract, ContractState};
use crate::call::Call;
use crate::error::BillingError;
use crate::ledger::{Bill, ContractKind};
use crate::settlement::Settlement;
use crate::tariff::Tariff;

#[derive(Debug, Clone)]
pub struct MonthToMonthContract {
    state: ContractState,
    tariff: Tariff,
}

impl MonthToMonthContract {
    /// Creates a contract priced with the standard tariff
    pub fn new(start: NaiveDate) -> Self {
        Self::priced(start, Tariff::standard())
    }

    /// Creates a contract priced with a custom tariff
    ///
    /// # Errors
    ///
    /// Returns `BillingError::Configuration` if the tariff is inconsistent.
    pub fn with_tariff(start: NaiveDate, tariff: Tariff) -> Result<Self, BillingError> {
        tariff.validate()?;
        Ok(Self::priced(start, tariff))
    }

    fn priced(start: NaiveDate, tariff: Tariff) -> Self {
        Self {
            state: ContractState::new(start, tariff.currency),
            tariff,
        }
    }
}

impl Contract for MonthToMonthContract {
    fn id(&self) -> ContractId {
        self.state.id()
    }

    fn kind(&self) -> ContractKind {
        ContractKind::MonthToMonth
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

        bill.set_rate(ContractKind::MonthToMonth, self.tariff.mtm_minute_rate);
        bill.add_fixed_cost(self.tariff.mtm_monthly_fee);

        info!(contract_id = %self.state.id(), %period, "Opened month-to-month billing period");
        Ok(self.state.install(period, bill))
    }

    fn bill_call(&mut self, call: &Call) -> Result<(), BillingError> {
        self.state.ensure_active()?;

        let minutes = call.billed_minutes();
        self.state.bill_mut().add_billed_minutes(minutes);

        debug!(contract_id = %self.state.id(), call_id = %call.id, minutes, "Billed call");
        Ok(())
    }

    fn cancel(&mut self) -> Result<Settlement, BillingError> {
        self.state.deactivate()?;

        let owed = self.state.bill().total_cost();
        info!(contract_id = %self.state.id(), %owed, "Cancelled month-to-month contract");
        Ok(Settlement::Owes(owed))
    }
}
