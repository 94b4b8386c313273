//! Goal Progress
//!
//! Savings goal status and totals.

use crate::config::Settings;
use crate::models::{Money, Priority, SavingsGoal};

/// Goals above this percentage count as nearly reached
pub const NEAR_COMPLETION_PERCENT: f64 = 70.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GoalLine {
    pub goal: SavingsGoal,
    /// Unclamped; may exceed 100
    pub percentage: f64,
    pub remaining: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub lines: Vec<GoalLine>,
    pub total_saved: Money,
    pub total_target: Money,
    pub near_completion: usize,
    pub high_priority: usize,
}

impl GoalProgress {
    pub fn generate(goals: &[SavingsGoal]) -> Self {
        let lines: Vec<GoalLine> = goals
            .iter()
            .map(|goal| GoalLine {
                percentage: goal.progress_percent(),
                remaining: goal.remaining(),
                goal: goal.clone(),
            })
            .collect();

        Self {
            total_saved: goals.iter().map(|g| g.current).sum(),
            total_target: goals.iter().map(|g| g.target).sum(),
            near_completion: lines
                .iter()
                .filter(|l| l.percentage > NEAR_COMPLETION_PERCENT)
                .count(),
            high_priority: goals
                .iter()
                .filter(|g| g.priority == Priority::High)
                .count(),
            lines,
        }
    }

    /// Overall saved share across every goal
    pub fn overall_percent(&self) -> f64 {
        self.total_saved.percent_of(self.total_target).unwrap_or(0.0)
    }

    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::from("Metas de ahorro\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');

        for line in &self.lines {
            let deadline = line
                .goal
                .deadline
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| "-".into());
            output.push_str(&format!(
                "{:<24} {:>12} / {:>12} {:>6.1}%  {}\n",
                line.goal.name,
                settings.format_money(line.goal.current),
                settings.format_money(line.goal.target),
                line.percentage,
                deadline
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "Ahorrado {} de {} ({:.1}%), {} cerca de cumplirse, {} de prioridad alta\n",
            settings.format_money(self.total_saved),
            settings.format_money(self.total_target),
            self.overall_percent(),
            self.near_completion,
            self.high_priority
        ));
        output
    }
}
