//! Goal and budget manager
//!
//! Mutates the goal, budget, recurring-template and sub-account parts of the
//! aggregate document. Independent of entry aggregation.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Accounts, AccountsPatch, Budget, Category, FinancialData, GoalDraft, GoalId, GoalPatch, Money,
    MonthKey, RecurringDraft, RecurringId, RecurringTransaction, SavingsGoal,
};

/// Result of a budget upsert
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUpsert {
    /// The record as it was before, if one already existed
    pub previous: Option<Budget>,
    pub budget: Budget,
}

/// Service over the planning collections of a [`FinancialData`]
pub struct PlanningManager<'a> {
    data: &'a mut FinancialData,
}

impl<'a> PlanningManager<'a> {
    pub fn new(data: &'a mut FinancialData) -> Self {
        Self { data }
    }

    /// Append a goal. The saved amount starts at zero.
    pub fn add_goal(&mut self, draft: GoalDraft) -> LedgerResult<SavingsGoal> {
        let goal = SavingsGoal {
            id: GoalId::new(),
            name: draft.name,
            current: Money::zero(),
            target: draft.target,
            deadline: draft.deadline,
            priority: draft.priority,
            category: draft.category,
        };
        goal.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.data.savings_goals.push(goal.clone());
        Ok(goal)
    }

    /// Merge `patch` into a goal
    ///
    /// Returns `Ok(None)` if no goal has this id. A patch that would leave
    /// a negative amount is rejected and nothing changes.
    pub fn update_goal(
        &mut self,
        id: GoalId,
        patch: GoalPatch,
    ) -> LedgerResult<Option<(SavingsGoal, SavingsGoal)>> {
        let Some(goal) = self.data.savings_goals.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };

        let mut updated = goal.clone();
        updated.apply(patch);
        updated
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let before = std::mem::replace(goal, updated.clone());
        Ok(Some((before, updated)))
    }

    pub fn delete_goal(&mut self, id: GoalId) -> Option<SavingsGoal> {
        let index = self.data.savings_goals.iter().position(|g| g.id == id)?;
        Some(self.data.savings_goals.remove(index))
    }

    /// Set the limit for `category` in `period`, creating the budget if needed
    pub fn upsert_budget(&mut self, category: Category, limit: Money, period: MonthKey) -> BudgetUpsert {
        if let Some(existing) = self
            .data
            .budgets
            .iter_mut()
            .find(|b| b.matches(&category, period))
        {
            let previous = existing.clone();
            existing.limit = limit;
            return BudgetUpsert {
                previous: Some(previous),
                budget: existing.clone(),
            };
        }

        let budget = Budget::new(category, limit, period);
        self.data.budgets.push(budget.clone());
        BudgetUpsert {
            previous: None,
            budget,
        }
    }

    /// Merge sub-account fields. Returns `(before, after)`.
    pub fn update_accounts(&mut self, patch: AccountsPatch) -> (Accounts, Accounts) {
        let before = self.data.accounts;
        self.data.accounts.apply(patch);
        (before, self.data.accounts)
    }

    /// Store a recurring template
    pub fn add_recurring(&mut self, draft: RecurringDraft) -> RecurringTransaction {
        let template = RecurringTransaction::from_draft(RecurringId::new(), draft);
        self.data.recurring_transactions.push(template.clone());
        template
    }

    pub fn delete_recurring(&mut self, id: RecurringId) -> Option<RecurringTransaction> {
        let index = self
            .data
            .recurring_transactions
            .iter()
            .position(|r| r.id == id)?;
        Some(self.data.recurring_transactions.remove(index))
    }

    /// Pause or resume a template. Returns `(before, after)`.
    pub fn set_recurring_active(
        &mut self,
        id: RecurringId,
        active: bool,
    ) -> Option<(RecurringTransaction, RecurringTransaction)> {
        let template = self
            .data
            .recurring_transactions
            .iter_mut()
            .find(|r| r.id == id)?;
        let before = template.clone();
        template.is_active = active;
        Some((before, template.clone()))
    }
}
