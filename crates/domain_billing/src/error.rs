//! Billing domain errors

use core_kernel::{BillingPeriod, ContractId, MoneyError, TemporalError};
use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// The contract has been cancelled and can no longer be billed
    #[error("Contract {0} has been cancelled")]
    ContractCancelled(ContractId),

    /// Call durations are whole seconds and never negative
    #[error("Invalid call duration: {0} seconds")]
    InvalidCallDuration(i64),

    /// A term contract must end on or after its start
    #[error("Invalid term: {0}")]
    InvalidTerm(#[source] TemporalError),

    /// A call arrived before any billing month was opened on the line
    #[error("No billing period has been opened for this line")]
    NoBillingPeriod,

    /// A call belongs to a different month than the one currently open
    #[error("Call in {call} cannot be billed while {current} is open")]
    PeriodMismatch {
        call: BillingPeriod,
        current: BillingPeriod,
    },

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Tariff could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<config::ConfigError> for BillingError {
    fn from(err: config::ConfigError) -> Self {
        BillingError::Configuration(err.to_string())
    }
}
