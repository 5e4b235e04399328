//! Test Utilities Crate
//!
//! Shared test infrastructure for the billing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built dates, periods and contracts
//! - `builders`: Builder for call records
//! - `assertions`: Assertion helpers for money and settlements
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;

/// Installs a test-friendly tracing subscriber; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
