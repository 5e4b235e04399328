//! Tariff - the fixed pricing policy applied by every contract
//!
//! The standard tariff carries the monthly fees, deposit, free-minute
//! quota and per-minute rates of each contract kind, plus the prepaid
//! auto top-up thresholds. Contracts copy their tariff at construction.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Currency;

use crate::error::BillingError;

/// Pricing policy for all contract kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    /// Currency every bill on the line is expressed in
    pub currency: Currency,
    /// Monthly fee for month-to-month contracts
    pub mtm_monthly_fee: Decimal,
    /// Per-minute rate for month-to-month contracts
    pub mtm_minute_rate: Decimal,
    /// Monthly fee for term contracts
    pub term_monthly_fee: Decimal,
    /// One-time deposit charged in a term contract's first month
    pub term_deposit: Decimal,
    /// Free minutes granted every month on a term contract
    pub term_free_minutes: u32,
    /// Per-minute rate for term contracts once free minutes run out
    pub term_minute_rate: Decimal,
    /// Per-minute rate for prepaid contracts
    pub prepaid_minute_rate: Decimal,
    /// A prepaid balance above this value triggers an automatic top-up
    pub prepaid_top_up_threshold: Decimal,
    /// Balance a prepaid contract is topped up to
    pub prepaid_top_up_target: Decimal,
}

impl Tariff {
    /// The standard pricing policy
    pub fn standard() -> Self {
        Self {
            currency: Currency::CAD,
            mtm_monthly_fee: dec!(50.00),
            mtm_minute_rate: dec!(0.05),
            term_monthly_fee: dec!(20.00),
            term_deposit: dec!(300.00),
            term_free_minutes: 100,
            term_minute_rate: dec!(0.1),
            prepaid_minute_rate: dec!(0.025),
            prepaid_top_up_threshold: dec!(-10),
            prepaid_top_up_target: dec!(-25),
        }
    }

    /// Loads the tariff from `TARIFF_*` environment variables layered over
    /// the standard policy
    ///
    /// Production billing always uses [`Tariff::standard`]. This is a hook for
    /// pricing simulations and tests that need to vary one policy value.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::Configuration` if a variable cannot be parsed
    /// or the resulting tariff is inconsistent.
    pub fn from_env() -> Result<Self, BillingError> {
        let tariff: Tariff = config::Config::builder()
            .add_source(config::Config::try_from(&Self::standard())?)
            .add_source(config::Environment::with_prefix("TARIFF").try_parsing(true))
            .build()?
            .try_deserialize()?;

        tariff.validate()?;
        Ok(tariff)
    }

    /// Checks the policy values are internally consistent
    pub fn validate(&self) -> Result<(), BillingError> {
        let rates = [
            ("mtm_minute_rate", self.mtm_minute_rate),
            ("term_minute_rate", self.term_minute_rate),
            ("prepaid_minute_rate", self.prepaid_minute_rate),
        ];
        for (name, rate) in rates {
            if rate.is_sign_negative() && !rate.is_zero() {
                return Err(BillingError::Configuration(format!(
                    "{} must not be negative, got {}",
                    name, rate
                )));
            }
        }

        if self.prepaid_top_up_target > self.prepaid_top_up_threshold {
            return Err(BillingError::Configuration(format!(
                "prepaid top-up target {} must not exceed threshold {}",
                self.prepaid_top_up_target, self.prepaid_top_up_threshold
            )));
        }

        Ok(())
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::standard()
    }
}
