//! Read-only reports over the ledger
//!
//! Monthly summary, budget progress and savings goal progress. Nothing here
//! mutates or persists state.

pub mod budget_progress;
pub mod goal_progress;
pub mod monthly_summary;

pub use budget_progress::{BudgetLine, BudgetProgress};
pub use goal_progress::{GoalLine, GoalProgress, NEAR_COMPLETION_PERCENT};
pub use monthly_summary::{CategoryTotal, MonthlySummary};
