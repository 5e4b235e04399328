//! Billing Domain - Phone Line Contracts
//!
//! This crate computes what a phone line costs each month and what is owed
//! when the line is cancelled.
//!
//! # Contract kinds
//!
//! - **Month-to-month**: flat monthly fee, every minute billed, no penalty
//! - **Term**: deposit in the first month, monthly fee, free minutes that
//!   reset each month, deposit recovered when cancelled after the term
//! - **Prepaid**: running balance drawn down by calls, automatic top-up when
//!   credit runs low
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{Call, PhoneLine, TermContract};
//!
//! let contract = TermContract::new(start, end)?;
//! let mut line = PhoneLine::new("867-5309", contract);
//!
//! line.new_month(1, 2019)?;
//! line.make_call(Call::new("867-5309", "555-0100", time, 6000)?)?;
//!
//! let owed = line.cancel()?;
//! ```

pub mod call;
pub mod contract;
pub mod error;
pub mod ledger;
pub mod phone_line;
pub mod settlement;
pub mod tariff;

pub use call::Call;
pub use contract::{Contract, MonthToMonthContract, PrepaidContract, TermContract};
pub use error::BillingError;
pub use ledger::{Bill, BillSummary, ContractKind};
pub use phone_line::PhoneLine;
pub use settlement::Settlement;
pub use tariff::Tariff;
