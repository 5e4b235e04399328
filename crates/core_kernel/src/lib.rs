//! Core Kernel - Foundational types shared by the billing crates
//!
//! This crate provides the building blocks used by the billing domain:
//! - Money types with precise decimal arithmetic
//! - Billing periods (calendar month + year)
//! - Strongly-typed identifiers

pub mod money;
pub mod temporal;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{BillingPeriod, DateRange, TemporalError};
pub use identifiers::{CallId, ContractId, LineId};
