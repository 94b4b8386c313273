//! The persisted aggregate document
//!
//! `FinancialData` holds the derived totals next to the goal, budget and
//! recurring collections. The totals are always recomputed from the entry
//! list; they are stored only so readers of the document see them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::Accounts;
use super::budget::Budget;
use super::category::Category;
use super::entry::MonthKey;
use super::goal::{Priority, SavingsGoal};
use super::ids::{BudgetId, GoalId};
use super::money::Money;
use super::recurring::RecurringTransaction;

/// Opening balance of a fresh ledger (5240.50)
pub const DEFAULT_INITIAL_BALANCE: Money = Money::from_cents(524050);

/// Aggregate document: totals plus goal/budget/recurring records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    pub balance: Money,
    pub monthly_income: Money,
    pub monthly_expenses: Money,
    #[serde(default)]
    pub savings_goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub recurring_transactions: Vec<RecurringTransaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub accounts: Accounts,
}

impl FinancialData {
    /// Seed state used when nothing usable is stored
    ///
    /// Seed goals and budgets carry fixed ids so they keep their identity
    /// across runs until the document is first written.
    pub fn seeded(initial_balance: Money, period: MonthKey) -> Self {
        Self {
            balance: initial_balance,
            monthly_income: Money::zero(),
            monthly_expenses: Money::zero(),
            savings_goals: vec![
                SavingsGoal {
                    id: GoalId::from_uuid(seed_uuid(1)),
                    name: "Vacaciones en Cusco".into(),
                    current: Money::from_cents(220000),
                    target: Money::from_cents(500000),
                    deadline: NaiveDate::from_ymd_opt(2025, 12, 31),
                    priority: Priority::High,
                    category: Category::Viajes,
                },
                SavingsGoal {
                    id: GoalId::from_uuid(seed_uuid(2)),
                    name: "Fondo de Emergencia".into(),
                    current: Money::from_cents(150000),
                    target: Money::from_cents(1000000),
                    deadline: NaiveDate::from_ymd_opt(2026, 6, 30),
                    priority: Priority::High,
                    category: Category::Emergencia,
                },
            ],
            recurring_transactions: Vec::new(),
            budgets: [
                (Category::Comida, 80000),
                (Category::Transporte, 30000),
                (Category::Entretenimiento, 40000),
            ]
            .into_iter()
            .zip(1..)
            .map(|((category, cents), n)| Budget {
                id: BudgetId::from_uuid(seed_uuid(n)),
                ..Budget::new(category, Money::from_cents(cents), period)
            })
            .collect(),
            accounts: Accounts {
                cash: Money::from_cents(50000),
                savings: Money::from_cents(420000),
                checking: Money::from_cents(54050),
            },
        }
    }

    /// Budgets for a given month
    pub fn budgets_for(&self, period: MonthKey) -> impl Iterator<Item = &Budget> {
        self.budgets.iter().filter(move |b| b.period() == period)
    }
}

/// `0000000n-0000-...`, so the short display form stays distinct
fn seed_uuid(n: u128) -> Uuid {
    Uuid::from_u128(n << 96)
}
