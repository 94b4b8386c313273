//! Recurring transaction templates
//!
//! Templates are stored alongside goals and budgets. Nothing posts them
//! automatically; see [`crate::services::recurring`] for the explicit
//! scheduler.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::entry::{EntryDraft, Participant};
use super::ids::RecurringId;
use super::money::Money;

/// How often a template repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// The occurrence after `date`. Month and year steps clamp to the last
    /// day of a shorter month.
    pub fn advance(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Daily => date.checked_add_days(Days::new(1)),
            Self::Weekly => date.checked_add_days(Days::new(7)),
            Self::Monthly => date.checked_add_months(Months::new(1)),
            Self::Yearly => date.checked_add_months(Months::new(12)),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "diario" => Ok(Self::Daily),
            "weekly" | "semanal" => Ok(Self::Weekly),
            "monthly" | "mensual" => Ok(Self::Monthly),
            "yearly" | "anual" => Ok(Self::Yearly),
            other => Err(format!("unknown frequency '{}'", other)),
        }
    }
}

/// A repeating income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransaction {
    pub id: RecurringId,
    pub description: String,
    /// Signed, same convention as entries
    pub amount: Money,
    pub category: Category,
    pub frequency: Frequency,
    /// Next date this template is due
    pub next_date: NaiveDate,
    pub user: Participant,
    pub is_active: bool,
}

impl RecurringTransaction {
    pub fn from_draft(id: RecurringId, draft: RecurringDraft) -> Self {
        Self {
            id,
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            frequency: draft.frequency,
            next_date: draft.next_date,
            user: draft.user,
            is_active: draft.is_active,
        }
    }

    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.is_active && self.next_date <= today
    }

    /// Entry fields for one occurrence on `on`
    pub fn entry_draft(&self, on: NaiveDate) -> EntryDraft {
        EntryDraft::new(
            self.description.clone(),
            self.amount,
            self.category.clone(),
            on.format("%Y-%m-%d").to_string(),
            self.user,
        )
        .recurring(true)
    }
}

/// Fields for a new template
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringDraft {
    pub description: String,
    pub amount: Money,
    pub category: Category,
    pub frequency: Frequency,
    pub next_date: NaiveDate,
    pub user: Participant,
    pub is_active: bool,
}
