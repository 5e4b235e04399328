//! Cancellation settlement

use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// Result of closing a phone line
///
/// `NothingOwed` is distinct from `Owes` with a zero amount: it means the
/// customer has no debt (a prepaid line may even hold unspent credit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "amount", rename_all = "snake_case")]
pub enum Settlement {
    /// The customer owes this amount; may be zero or negative for a
    /// term contract refund
    Owes(Money),
    /// No debt remains on the line
    NothingOwed,
}

impl Settlement {
    /// The amount owed, if any
    pub fn amount(&self) -> Option<Money> {
        match self {
            Settlement::Owes(amount) => Some(*amount),
            Settlement::NothingOwed => None,
        }
    }

    pub fn is_nothing_owed(&self) -> bool {
        matches!(self, Settlement::NothingOwed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_owed_is_not_nothing_owed() {
        let zero = Settlement::Owes(Money::zero(Currency::CAD));
        assert!(!zero.is_nothing_owed());
        assert_eq!(zero.amount(), Some(Money::zero(Currency::CAD)));
        assert_eq!(Settlement::NothingOwed.amount(), None);
    }

    #[test]
    fn test_owes_carries_amount() {
        let owed = Settlement::Owes(Money::new(dec!(12.5), Currency::CAD));
        assert_eq!(owed.amount().map(|m| m.amount()), Some(dec!(12.5)));
    }
}
