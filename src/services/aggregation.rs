//! Aggregation engine
//!
//! Derives the balance and the current-month income and expense totals from
//! the full entry list. Always a full scan; entry counts are household-sized.

use crate::models::{Entry, FinancialData, Money, MonthKey};

/// Totals derived from the entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aggregates {
    /// Initial balance plus every entry amount
    pub balance: Money,
    /// Sum of positive amounts timestamped in the current month
    pub monthly_income: Money,
    /// Sum of absolute negative amounts timestamped in the current month
    pub monthly_expenses: Money,
}

impl Aggregates {
    /// Copy the totals into the aggregate document
    pub fn apply_to(&self, data: &mut FinancialData) {
        data.balance = self.balance;
        data.monthly_income = self.monthly_income;
        data.monthly_expenses = self.monthly_expenses;
    }

    pub fn monthly_net(&self) -> Money {
        self.monthly_income - self.monthly_expenses
    }
}

/// Compute all aggregates for `entries` as of `current` month
pub fn compute(initial_balance: Money, entries: &[Entry], current: MonthKey) -> Aggregates {
    let mut totals = Aggregates {
        balance: initial_balance,
        ..Aggregates::default()
    };

    for entry in entries {
        totals.balance += entry.amount;

        if !entry.falls_in(current) {
            continue;
        }
        if entry.is_income() {
            totals.monthly_income += entry.amount;
        } else if entry.is_expense() {
            totals.monthly_expenses += entry.amount.abs();
        }
    }

    totals
}
