//! Sub-account balances
//!
//! Informational figures kept by hand. They are never reconciled against the
//! entry-derived balance.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// The three named sub-balances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Accounts {
    pub cash: Money,
    pub savings: Money,
    pub checking: Money,
}

impl Accounts {
    pub fn total(&self) -> Money {
        self.cash + self.savings + self.checking
    }

    /// Merge the supplied fields
    pub fn apply(&mut self, patch: AccountsPatch) {
        if let Some(cash) = patch.cash {
            self.cash = cash;
        }
        if let Some(savings) = patch.savings {
            self.savings = savings;
        }
        if let Some(checking) = patch.checking {
            self.checking = checking;
        }
    }
}

/// Partial update for [`Accounts`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccountsPatch {
    pub cash: Option<Money>,
    pub savings: Option<Money>,
    pub checking: Option<Money>,
}

impl AccountsPatch {
    pub fn is_empty(&self) -> bool {
        self.cash.is_none() && self.savings.is_none() && self.checking.is_none()
    }
}
