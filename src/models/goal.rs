//! Savings goal model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::GoalId;
use super::money::Money;

/// Goal priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" | "alta" => Ok(Self::High),
            "medium" | "media" => Ok(Self::Medium),
            "low" | "baja" => Ok(Self::Low),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

/// A savings target the couple is working toward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,
    pub name: String,
    /// Amount saved so far
    pub current: Money,
    pub target: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
    pub category: Category,
}

impl SavingsGoal {
    /// Progress toward the target as a percentage; may exceed 100
    pub fn progress_percent(&self) -> f64 {
        self.current.percent_of(self.target).unwrap_or(0.0)
    }

    /// What is still missing to reach the target (negative once exceeded)
    pub fn remaining(&self) -> Money {
        self.target - self.current
    }

    pub fn is_reached(&self) -> bool {
        self.current >= self.target
    }

    /// Apply a partial update
    pub fn apply(&mut self, patch: GoalPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(current) = patch.current {
            self.current = current;
        }
        if let Some(target) = patch.target {
            self.target = target;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.current.is_negative() {
            return Err(GoalValidationError::NegativeCurrent);
        }
        if self.target.is_negative() {
            return Err(GoalValidationError::NegativeTarget);
        }
        Ok(())
    }
}

/// Fields for a new goal. The saved amount always starts at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalDraft {
    pub name: String,
    pub target: Money,
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
    pub category: Category,
}

/// Partial update for a goal; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalPatch {
    pub name: Option<String>,
    pub current: Option<Money>,
    pub target: Option<Money>,
    /// `Some(None)` clears the deadline
    pub deadline: Option<Option<NaiveDate>>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    NegativeCurrent,
    NegativeTarget,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCurrent => write!(f, "Saved amount cannot be negative"),
            Self::NegativeTarget => write!(f, "Target amount cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}
