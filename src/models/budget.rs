//! Category budget model
//!
//! A budget caps spending for one category in one calendar month. At most one
//! budget exists per (category, month, year); see
//! [`PlanningManager::upsert_budget`](crate::services::PlanningManager::upsert_budget).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::entry::MonthKey;
use super::ids::BudgetId;
use super::money::Money;

/// Monthly spending limit for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub category: Category,
    pub limit: Money,
    /// Stored spent amount. The ledger never updates it; reports derive the
    /// real figure from entries.
    pub spent: Money,
    /// 0 = January .. 11 = December
    pub month: u32,
    pub year: i32,
}

impl Budget {
    /// Create a budget with nothing spent
    pub fn new(category: Category, limit: Money, period: MonthKey) -> Self {
        Self {
            id: BudgetId::new(),
            category,
            limit,
            spent: Money::zero(),
            month: period.month0,
            year: period.year,
        }
    }

    pub fn period(&self) -> MonthKey {
        MonthKey {
            year: self.year,
            month0: self.month,
        }
    }

    /// Whether this budget is the record for `category` in `period`
    pub fn matches(&self, category: &Category, period: MonthKey) -> bool {
        &self.category == category && self.period() == period
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: límite {}", self.period(), self.category, self.limit)
    }
}
