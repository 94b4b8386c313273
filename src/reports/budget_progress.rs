//! Budget Progress
//!
//! Compares each of the current month's budgets with what the entries say
//! was actually spent. The `spent` field stored on a budget is ignored.

use crate::clock::Clock;
use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::{Category, Money, MonthKey};
use crate::storage::DocumentStore;

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLine {
    pub category: Category,
    pub limit: Money,
    pub spent: Money,
    /// Negative once over budget
    pub remaining: Money,
    /// Spent as a share of the limit; 0 for a zero limit
    pub percentage: f64,
    pub over_budget: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    pub month: MonthKey,
    pub lines: Vec<BudgetLine>,
    pub total_limit: Money,
    pub total_spent: Money,
}

impl BudgetProgress {
    pub fn generate<S: DocumentStore, C: Clock>(ledger: &Ledger<S, C>) -> Self {
        let month = ledger.current_month();
        let spending = ledger.monthly_by_category();

        let lines: Vec<BudgetLine> = ledger
            .financial_data()
            .budgets_for(month)
            .map(|budget| {
                let spent = spending.get(&budget.category).copied().unwrap_or_default();
                BudgetLine {
                    category: budget.category.clone(),
                    limit: budget.limit,
                    spent,
                    remaining: budget.limit - spent,
                    percentage: spent.percent_of(budget.limit).unwrap_or(0.0),
                    over_budget: spent > budget.limit,
                }
            })
            .collect();

        Self {
            month,
            total_limit: lines.iter().map(|l| l.limit).sum(),
            total_spent: lines.iter().map(|l| l.spent).sum(),
            lines,
        }
    }

    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetLine> {
        self.lines.iter().filter(|l| l.over_budget)
    }

    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = format!("Presupuestos {}\n", self.month);
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.lines.is_empty() {
            output.push_str("Sin presupuestos para este mes.\n");
            return output;
        }

        for line in &self.lines {
            output.push_str(&format!(
                "{:<16} {:>12} / {:>12} {:>7.1}%{}\n",
                line.category.label(),
                settings.format_money(line.spent),
                settings.format_money(line.limit),
                line.percentage,
                if line.over_budget { "  EXCEDIDO" } else { "" }
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>12} / {:>12}\n",
            "Total",
            settings.format_money(self.total_spent),
            settings.format_money(self.total_limit)
        ));
        output
    }
}
